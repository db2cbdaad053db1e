use std::borrow::Cow;

use parley::style::{FontStack, FontStyle, FontWeight, StyleProperty};

use crate::{compose::tree::StyledRun, render::backend::FontSet};

/// Parley brush: index of the styled run a glyph run came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunBrush(pub u32);

/// Stateful helper for shaping styled runs with the fonts of a [`FontSet`].
///
/// Requested family stacks are extended with every registered family, so text always
/// resolves to some loaded face when at least one font is available.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<RunBrush>,
    fallback_families: Vec<String>,
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine")
            .field("fallback_families", &self.fallback_families)
            .finish_non_exhaustive()
    }
}

impl TextEngine {
    pub fn new(fonts: &FontSet) -> Self {
        let mut font_ctx = parley::FontContext::default();
        let mut fallback_families = Vec::new();
        for face in fonts.faces() {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(face.as_ref().clone()), None);
            for (id, _) in families {
                if let Some(name) = font_ctx.collection.family_name(id) {
                    let name = name.to_string();
                    if !fallback_families.contains(&name) {
                        fallback_families.push(name);
                    }
                }
            }
        }
        if fallback_families.is_empty() {
            tracing::debug!("text engine has no registered fonts");
        }
        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            fallback_families,
        }
    }

    pub fn has_fonts(&self) -> bool {
        !self.fallback_families.is_empty()
    }

    fn family_stack(&self, family: &str) -> String {
        let mut stack = family.to_string();
        for name in &self.fallback_families {
            stack.push_str(", \"");
            stack.push_str(name);
            stack.push('"');
        }
        stack
    }

    /// Shape `runs` as one paragraph at `size_px`, broken at `max_width` when given.
    pub fn layout_runs(
        &mut self,
        runs: &[StyledRun],
        family: &str,
        size_px: f32,
        max_width: Option<f32>,
    ) -> parley::Layout<RunBrush> {
        let text: String = runs.iter().map(|r| r.text.as_str()).collect();
        let stack = self.family_stack(family);

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &text, 1.0, true);
        builder.push_default(StyleProperty::FontStack(FontStack::Source(Cow::Owned(stack))));
        builder.push_default(StyleProperty::FontSize(size_px));
        builder.push_default(StyleProperty::Brush(RunBrush(0)));

        let mut start = 0usize;
        for (i, run) in runs.iter().enumerate() {
            let end = start + run.text.len();
            if end > start {
                builder.push(StyleProperty::Brush(RunBrush(i as u32)), start..end);
                if run.bold {
                    builder.push(StyleProperty::FontWeight(FontWeight::BOLD), start..end);
                }
                if run.italic {
                    builder.push(StyleProperty::FontStyle(FontStyle::Italic), start..end);
                }
            }
            start = end;
        }

        let mut layout: parley::Layout<RunBrush> = builder.build(&text);
        layout.break_all_lines(max_width);
        layout.align(
            max_width,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        layout
    }

    /// Width of a single unbroken line of text, in pixels.
    pub fn measure_line(&mut self, run: &StyledRun, family: &str, size_px: f32) -> f64 {
        let layout = self.layout_runs(std::slice::from_ref(run), family, size_px, None);
        layout
            .lines()
            .map(|line| f64::from(line.metrics().advance))
            .fold(0.0, f64::max)
    }
}
