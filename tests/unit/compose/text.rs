use super::*;
use crate::{
    GlobalSettings, Slide, TemplateKind, layout::resolve::resolve_layout, markup::block::parse_blocks,
};

fn layout() -> ResolvedLayout {
    resolve_layout(&Slide::new("s", ""), &GlobalSettings::default())
}

fn palette(accent: Option<Color>) -> Palette {
    Palette::new(TemplateKind::FeedText, crate::Theme::Light, accent)
}

#[test]
fn headings_are_bold_and_sized() {
    let layout = layout();
    let palette = palette(None);
    let style = FlowStyle {
        layout: &layout,
        sizes: TypeScale::base(TemplateKind::FeedText, crate::SlideRole::Content),
        palette: &palette,
        mark: MarkStyle::Highlight,
        bullet: FEED_BULLET,
    };
    let flow = style.flow(&parse_blocks("# Hook\n## Sub\nBody"));
    assert_eq!(flow.paragraphs[0].kind, ParagraphKind::Heading1);
    assert_eq!(flow.paragraphs[0].font_size, 60.0);
    assert!(flow.paragraphs[0].runs[0].bold);
    assert_eq!(flow.paragraphs[1].font_size, 46.0);
    assert_eq!(flow.paragraphs[2].font_size, 38.0);
    assert!(!flow.paragraphs[2].runs[0].bold);
    assert_eq!(flow.paragraph_gap, 16.0);
}

#[test]
fn numbered_marker_keeps_author_number() {
    let layout = layout();
    let palette = palette(None);
    let style = FlowStyle {
        layout: &layout,
        sizes: TypeScale::base(TemplateKind::FeedText, crate::SlideRole::Content),
        palette: &palette,
        mark: MarkStyle::Highlight,
        bullet: FEED_BULLET,
    };
    let flow = style.flow(&parse_blocks("5. Fifth item"));
    let marker = flow.paragraphs[0].marker.as_ref().unwrap();
    assert_eq!(marker.text, "5.");
    assert_eq!(flow.paragraphs[0].runs[0].text, "Fifth item");
}

#[test]
fn accent_colours_strong_runs_and_markers() {
    let layout = layout();
    let accent = Color::rgb(0x1d, 0x9b, 0xf0);
    let palette = palette(Some(accent));
    let style = FlowStyle {
        layout: &layout,
        sizes: TypeScale::base(TemplateKind::FeedText, crate::SlideRole::Content),
        palette: &palette,
        mark: MarkStyle::Highlight,
        bullet: FEED_BULLET,
    };
    let flow = style.flow(&parse_blocks("- **key** and __hot__"));
    let p = &flow.paragraphs[0];
    assert_eq!(p.marker.as_ref().unwrap().color, accent);
    assert_eq!(p.runs[0].color, accent);
    assert!(p.runs[0].bold);
    assert_eq!(p.runs[2].highlight, Some(accent.with_alpha_pct(25.0)));
}

#[test]
fn underline_mark_style_replaces_highlight() {
    let layout = layout();
    let palette = palette(None);
    let style = FlowStyle {
        layout: &layout,
        sizes: TypeScale::base(TemplateKind::CinematicImage, crate::SlideRole::Content),
        palette: &palette,
        mark: MarkStyle::Underline,
        bullet: FEED_BULLET,
    };
    let flow = style.flow(&parse_blocks("__hot__"));
    assert!(flow.paragraphs[0].runs[0].underline);
    assert_eq!(flow.paragraphs[0].runs[0].highlight, None);
}

#[test]
fn spacer_adds_half_gap_and_splits_gap_accounting() {
    let layout = layout();
    let palette = palette(None);
    let style = FlowStyle {
        layout: &layout,
        sizes: TypeScale::base(TemplateKind::FeedText, crate::SlideRole::Content),
        palette: &palette,
        mark: MarkStyle::Highlight,
        bullet: FEED_BULLET,
    };
    let flow = style.flow(&parse_blocks("a\n\nb"));
    assert_eq!(flow.paragraphs[1].space, 8.0);

    let line = 38.0 * 1.5;
    assert_eq!(estimate_height(&flow, 900.0), line + 8.0 + line);

    let flow = style.flow(&parse_blocks("a\nb"));
    assert_eq!(estimate_height(&flow, 900.0), line + 16.0 + line);
}

#[test]
fn long_text_wraps_greedily() {
    // 10 chars per line at 0.52em of 100px in 530px.
    assert_eq!(estimate_lines("aaaa bbbb", 530.0, 100.0), 1);
    assert_eq!(estimate_lines("aaaa bbbbbb", 530.0, 100.0), 2);
    assert_eq!(estimate_lines("aaaaaaaaaaaaaaaaaaaaaaa", 530.0, 100.0), 3);
    assert_eq!(estimate_lines("", 530.0, 100.0), 1);
}
