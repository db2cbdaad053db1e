use crate::{
    compose::palette::Palette,
    compose::tree::{ParagraphKind, StyledRun, TextFlow, TextParagraph, VerticalAlign},
    foundation::core::Color,
    layout::resolve::ResolvedLayout,
    layout::typography::{TypeScale, gap_px, spacer_px},
    markup::block::Block,
    markup::inline::{InlineRun, RunStyle},
};

/// Average glyph advance used for height estimates, in em.
pub const AVG_GLYPH_EM: f64 = 0.52;

/// Hanging indent of list items, in em of the item's font size.
pub const MARKER_INDENT_EM: f64 = 1.25;

/// List marker of feed-text bullets.
pub const FEED_BULLET: &str = "\u{2022}";
/// List marker of cinematic-image and lesson bullets.
pub const SOLID_BULLET: &str = "\u{25cf}";

/// How `mark` runs are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkStyle {
    Highlight,
    Underline,
}

/// Everything needed to turn blocks into a styled [`TextFlow`].
#[derive(Clone, Copy, Debug)]
pub struct FlowStyle<'a> {
    pub layout: &'a ResolvedLayout,
    pub sizes: TypeScale,
    pub palette: &'a Palette,
    pub mark: MarkStyle,
    pub bullet: &'static str,
}

impl FlowStyle<'_> {
    /// Resolve theme colours and decorations for a run list.
    pub fn style_runs(&self, runs: &[InlineRun], base: Color, force_bold: bool) -> Vec<StyledRun> {
        runs.iter()
            .map(|run| {
                let mut styled = StyledRun {
                    text: run.text.clone(),
                    style: run.style,
                    color: base,
                    bold: force_bold,
                    italic: false,
                    strike: false,
                    underline: false,
                    highlight: None,
                };
                match run.style {
                    RunStyle::Plain => {}
                    RunStyle::Strong => {
                        styled.bold = true;
                        styled.color = self.palette.accent.unwrap_or(base);
                    }
                    RunStyle::Emphasis => styled.italic = true,
                    RunStyle::Strike => styled.strike = true,
                    RunStyle::Mark => match self.mark {
                        MarkStyle::Highlight => styled.highlight = Some(self.palette.mark()),
                        MarkStyle::Underline => styled.underline = true,
                    },
                }
                styled
            })
            .collect()
    }

    fn marker(&self, text: String) -> StyledRun {
        StyledRun {
            text,
            style: RunStyle::Plain,
            color: self.palette.strong(),
            bold: true,
            italic: false,
            strike: false,
            underline: false,
            highlight: None,
        }
    }

    pub fn paragraph(&self, block: &Block) -> TextParagraph {
        let text = self.palette.text;
        let (kind, marker, font_size, bold) = match block {
            Block::Heading1 { .. } => (ParagraphKind::Heading1, None, self.sizes.h1, true),
            Block::Heading2 { .. } => (ParagraphKind::Heading2, None, self.sizes.h2, true),
            Block::Bullet { .. } => (
                ParagraphKind::Bullet,
                Some(self.marker(self.bullet.to_string())),
                self.sizes.body,
                false,
            ),
            Block::Numbered { number, .. } => (
                ParagraphKind::Numbered,
                Some(self.marker(format!("{number}."))),
                self.sizes.body,
                false,
            ),
            Block::Paragraph { .. } => (ParagraphKind::Paragraph, None, self.sizes.body, false),
            Block::Spacer => {
                return TextParagraph {
                    kind: ParagraphKind::Spacer,
                    marker: None,
                    runs: Vec::new(),
                    font_size: self.sizes.body,
                    space: spacer_px(self.layout.paragraph_gap),
                };
            }
        };
        TextParagraph {
            kind,
            marker,
            runs: self.style_runs(block.runs(), text, bold),
            font_size,
            space: 0.0,
        }
    }

    /// Styled flow for `blocks`, top-aligned.
    pub fn flow(&self, blocks: &[Block]) -> TextFlow {
        TextFlow {
            paragraphs: blocks.iter().map(|b| self.paragraph(b)).collect(),
            align: self.layout.text_align,
            valign: VerticalAlign::Top,
            font_family: self.layout.font_family.clone(),
            line_height: self.layout.line_height,
            paragraph_gap: gap_px(self.layout.paragraph_gap),
        }
    }
}

/// Estimated height of a flow set `width` reference px wide.
///
/// Greedy word wrap with an average advance of [`AVG_GLYPH_EM`]; words longer than a line
/// are broken by character count.
pub fn estimate_height(flow: &TextFlow, width: f64) -> f64 {
    let mut height = 0.0;
    let mut prev_text = false;
    for p in &flow.paragraphs {
        if p.kind == ParagraphKind::Spacer {
            height += p.space;
            prev_text = false;
            continue;
        }
        if prev_text {
            height += flow.paragraph_gap;
        }
        let indent = if p.marker.is_some() {
            p.font_size * MARKER_INDENT_EM
        } else {
            0.0
        };
        let text: String = p.runs.iter().map(|r| r.text.as_str()).collect();
        let lines = estimate_lines(&text, (width - indent).max(0.0), p.font_size);
        height += lines as f64 * p.font_size * flow.line_height;
        prev_text = true;
    }
    height
}

fn estimate_lines(text: &str, width: f64, font_size: f64) -> usize {
    let per_line = ((width / (font_size * AVG_GLYPH_EM)).floor() as usize).max(1);
    let mut lines = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed <= per_line {
            used = needed;
        } else if used == 0 {
            lines += (len - 1) / per_line;
            used = (len - 1) % per_line + 1;
        } else {
            lines += 1 + (len.max(1) - 1) / per_line;
            used = (len.max(1) - 1) % per_line + 1;
        }
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/compose/text.rs"]
mod tests;
