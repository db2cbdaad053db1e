use super::*;
use crate::{
    GlobalSettings, Profile, Slide, TemplateKind, Theme,
    compose::template::compose,
    compose::tree::{Element, ParagraphKind},
    foundation::core::Color,
    layout::resolve::resolve_layout,
    markup::block::parse_blocks,
};

fn lesson(slide: &Slide, theme: Theme) -> VisualTree {
    let mut settings = GlobalSettings::default();
    settings.template = TemplateKind::Lesson;
    settings.theme = theme;
    let layout = resolve_layout(slide, &settings);
    let blocks = parse_blocks(&slide.content);
    compose(TemplateKind::Lesson, &layout, &blocks, slide, &Profile::default(), 1, 3)
}

fn flow<'a>(tree: &'a VisualTree, id: &str) -> &'a TextFlow {
    let layer = tree.layers.iter().find(|l| l.id == id).unwrap();
    let Element::Text(flow) = &layer.children[0] else {
        panic!("{id} holds text");
    };
    flow
}

#[test]
fn palette_is_pure_black_and_white() {
    let tree = lesson(&Slide::new("l", "Body"), Theme::Dark);
    assert_eq!(tree.background, Color::BLACK);
    assert_eq!(flow(&tree, "l/text").paragraphs[0].runs[0].color, Color::WHITE);

    let tree = lesson(&Slide::new("l", "Body"), Theme::Light);
    assert_eq!(tree.background, Color::WHITE);
    assert_eq!(flow(&tree, "l/text").paragraphs[0].runs[0].color, Color::BLACK);
}

#[test]
fn cover_uses_the_band_and_cover_title_size() {
    let mut s = Slide::new("l", "# Big idea");
    s.role = SlideRole::Cover;
    s.show_image = true;
    let tree = lesson(&s, Theme::Dark);
    let band = tree.layer(LayerKind::Illustration).unwrap();
    assert_eq!(band.geometry.top, Length::ZERO);
    assert_eq!(band.geometry.width, Length::FULL);
    assert!(tree.layer(LayerKind::Gradient).is_some());
    assert_eq!(flow(&tree, "l/text").paragraphs[0].font_size, 84.0);
}

#[test]
fn content_image_goes_between_title_and_body() {
    let mut s = Slide::new("l", "# Title\nBody");
    s.show_image = true;
    s.image_url = Some("x.png".into());
    let tree = lesson(&s, Theme::Light);
    let top = |id: &str| {
        tree.layers
            .iter()
            .find(|l| l.id == id)
            .unwrap()
            .geometry
            .resolve(1080.0, 1350.0)
            .y0
    };
    assert!(top("l/title") < top("l/illustration"));
    assert!(top("l/illustration") < top("l/text"));
    assert_eq!(flow(&tree, "l/title").paragraphs[0].kind, ParagraphKind::Heading1);
    assert_eq!(flow(&tree, "l/title").paragraphs[0].font_size, 64.0);
}

#[test]
fn cta_is_centered_both_ways() {
    let mut s = Slide::new("l", "# Follow for more");
    s.role = SlideRole::Cta;
    let tree = lesson(&s, Theme::Dark);
    let f = flow(&tree, "l/text");
    assert_eq!(f.align, TextAlign::Center);
    assert_eq!(f.valign, VerticalAlign::Center);
}

#[test]
fn placeholder_is_drawn_in_pure_black_and_white() {
    use crate::foundation::core::FrameSize;
    use crate::render::{
        backend::{RenderBackend, RenderMode, RenderSettings},
        cpu::CpuBackend,
        images::FsImageLoader,
        settle::settle,
    };

    let mut s = Slide::new("l", "# Big idea");
    s.role = SlideRole::Cover;
    s.show_image = true;
    let size = FrameSize::new(108, 135).unwrap();
    for (theme, surface) in [(Theme::Light, [0, 0, 0, 255]), (Theme::Dark, [255; 4])] {
        let tree = lesson(&s, theme);
        let Element::Placeholder { surface: fill, ink, .. } =
            tree.layer(LayerKind::Illustration).unwrap().children[0]
        else {
            panic!("placeholder");
        };
        assert_eq!(fill.a, 255);
        assert_eq!(ink, tree.background);

        let frame = settle(tree, &FsImageLoader::new("."));
        let pixels = CpuBackend::new(RenderSettings::default())
            .render(&frame, size, RenderMode::Capture)
            .unwrap();
        for (x, y) in [(4, 4), (100, 10), (20, 20)] {
            assert_eq!(pixels.pixel(x, y), Some(surface), "{theme:?} at ({x}, {y})");
        }
    }
}

#[test]
fn bullets_use_the_solid_dot() {
    let tree = lesson(&Slide::new("l", "- item"), Theme::Light);
    let marker = flow(&tree, "l/text").paragraphs[0].marker.as_ref().unwrap();
    assert_eq!(marker.text, "\u{25cf}");
}

#[test]
fn oversized_image_keeps_a_minimum_body_band() {
    let mut s = Slide::new("l", "# Title\nBody");
    s.show_image = true;
    s.image_scale = Some(100.0);
    let tree = lesson(&s, Theme::Light);
    let body = tree.layers.iter().find(|l| l.id == "l/text").unwrap();
    let rect = body.geometry.resolve(1080.0, 1350.0);
    assert!((rect.height() - chrome::MIN_TEXT_BAND).abs() < 1e-9, "{rect:?}");
}
