use super::*;
use crate::BackgroundImage;

fn slide() -> Slide {
    Slide::new("s1", "# Hook\nBody")
}

#[test]
fn content_padding_follows_the_documented_example() {
    let mut global = GlobalSettings::default();
    let mut s = slide();

    assert_eq!(resolve_layout(&s, &global).content_padding, 64.0);

    global.layout.content_padding = Some(80.0);
    assert_eq!(resolve_layout(&s, &global).content_padding, 80.0);

    s.content_padding = Some(40.0);
    assert_eq!(resolve_layout(&s, &global).content_padding, 40.0);
}

// (name, set slide override, set global override, read resolved value, default)
type Case = (
    &'static str,
    fn(&mut Slide, f64),
    Option<fn(&mut GlobalSettings, f64)>,
    fn(&ResolvedLayout) -> f64,
    f64,
);

fn numeric_cases() -> Vec<Case> {
    vec![
        (
            "content_padding",
            |s, v| s.content_padding = Some(v),
            Some(|g, v| g.layout.content_padding = Some(v)),
            |r| r.content_padding,
            64.0,
        ),
        (
            "line_height",
            |s, v| s.line_height = Some(v),
            Some(|g, v| g.layout.line_height = Some(v)),
            |r| r.line_height,
            1.5,
        ),
        (
            "paragraph_gap",
            |s, v| s.paragraph_gap = Some(v),
            Some(|g, v| g.layout.paragraph_gap = Some(v)),
            |r| r.paragraph_gap,
            1.0,
        ),
        (
            "font_scale",
            |s, v| s.font_scale = Some(v),
            Some(|g, v| g.font_scale = Some(v)),
            |r| r.font_scale,
            1.0,
        ),
        (
            "image_canvas_offset",
            |s, v| s.image_canvas_offset = Some(v),
            Some(|g, v| g.layout.image_canvas_offset = Some(v)),
            |r| r.image_canvas_offset,
            0.0,
        ),
        (
            "image_margin",
            |s, v| s.image_margin = Some(v),
            Some(|g, v| g.layout.image_margin = Some(v)),
            |r| r.image_margin,
            0.0,
        ),
        (
            "image_scale",
            |s, v| s.image_scale = Some(v),
            None,
            |r| r.image_scale,
            50.0,
        ),
        (
            "image_offset_y",
            |s, v| s.image_offset_y = Some(v),
            None,
            |r| r.image_offset_y,
            50.0,
        ),
        (
            "image_text_spacing",
            |s, v| s.image_text_spacing = Some(v),
            None,
            |r| r.image_text_spacing,
            24.0,
        ),
        (
            "gradient_height",
            |s, v| s.gradient_height = Some(v),
            None,
            |r| r.gradient_height,
            60.0,
        ),
        (
            "gradient_opacity",
            |s, v| s.gradient_opacity = Some(v),
            None,
            |r| r.gradient_opacity,
            100.0,
        ),
    ]
}

#[test]
fn every_numeric_parameter_honours_precedence() {
    for (name, set_slide, set_global, read, default) in numeric_cases() {
        let mut global = GlobalSettings::default();
        let mut s = slide();
        assert_eq!(read(&resolve_layout(&s, &global)), default, "{name} default");

        if let Some(set_global) = set_global {
            set_global(&mut global, 2.0);
            assert_eq!(read(&resolve_layout(&s, &global)), 2.0, "{name} global");
        }

        set_slide(&mut s, 3.0);
        assert_eq!(read(&resolve_layout(&s, &global)), 3.0, "{name} slide");
    }
}

#[test]
fn enum_parameters_honour_precedence() {
    let mut global = GlobalSettings::default();
    let mut s = slide();
    let r = resolve_layout(&s, &global);
    assert_eq!(r.text_align, TextAlign::Left);
    assert_eq!(r.font_style, FontStyle::Modern);
    assert_eq!(r.theme, Theme::Light);

    global.layout.text_align = Some(TextAlign::Center);
    global.font_style = Some(FontStyle::Classic);
    global.theme = Theme::Dark;
    let r = resolve_layout(&s, &global);
    assert_eq!(r.text_align, TextAlign::Center);
    assert_eq!(r.font_style, FontStyle::Classic);
    assert_eq!(r.theme, Theme::Dark);

    s.text_align = Some(TextAlign::Right);
    s.font_style = Some(FontStyle::Mono);
    s.theme = Some(Theme::Light);
    let r = resolve_layout(&s, &global);
    assert_eq!(r.text_align, TextAlign::Right);
    assert_eq!(r.font_style, FontStyle::Mono);
    assert_eq!(r.theme, Theme::Light);
}

#[test]
fn image_scale_default_depends_on_template() {
    let mut global = GlobalSettings::default();
    let s = slide();
    global.template = TemplateKind::CinematicImage;
    assert_eq!(resolve_layout(&s, &global).image_scale, 45.0);
    global.template = TemplateKind::FeedText;
    assert_eq!(resolve_layout(&s, &global).image_scale, 50.0);
}

#[test]
fn background_overlay_fields_cascade_from_the_background_image() {
    let global = GlobalSettings::default();
    let mut s = slide();
    let r = resolve_layout(&s, &global);
    assert_eq!(r.overlay_color, Color::BLACK);
    assert_eq!(r.overlay_opacity, 50.0);
    assert_eq!(r.overlay_text_color, Color::WHITE);

    s.background_image = Some(BackgroundImage {
        url: "bg.png".into(),
        overlay_color: Some(Color::rgb(10, 20, 30)),
        overlay_opacity: Some(70.0),
        text_color: Some(Color::rgb(250, 240, 0)),
    });
    let r = resolve_layout(&s, &global);
    assert_eq!(r.overlay_color, Color::rgb(10, 20, 30));
    assert_eq!(r.overlay_opacity, 70.0);
    assert_eq!(r.overlay_text_color, Color::rgb(250, 240, 0));
}

#[test]
fn unknown_font_style_falls_back_to_modern() {
    let global = GlobalSettings::default();
    let mut s = slide();
    s.font_style = Some(FontStyle::Other);
    let r = resolve_layout(&s, &global);
    assert_eq!(r.font_style, FontStyle::Modern);
    assert!(r.font_family.starts_with("Inter"));
}

#[test]
fn non_finite_and_out_of_range_values_are_tamed() {
    let mut global = GlobalSettings::default();
    global.layout.content_padding = Some(72.0);
    let mut s = slide();
    s.content_padding = Some(f64::NAN);
    s.image_scale = Some(140.0);
    s.line_height = Some(-1.0);
    let r = resolve_layout(&s, &global);
    assert_eq!(r.content_padding, 72.0);
    assert_eq!(r.image_scale, 100.0);
    assert_eq!(r.line_height, 0.8);
}

#[test]
fn accent_only_present_when_enabled() {
    let mut global = GlobalSettings::default();
    let s = slide();
    assert_eq!(resolve_layout(&s, &global).accent, None);
    global.accent_enabled = true;
    assert_eq!(
        resolve_layout(&s, &global).accent,
        Some(global.accent_color)
    );
}

#[test]
fn resolution_is_referentially_transparent() {
    let mut global = GlobalSettings::default();
    global.layout.line_height = Some(1.3);
    let mut s = slide();
    s.content_layout = Some(ContentLayout::Other);
    assert_eq!(resolve_layout(&s, &global), resolve_layout(&s, &global));
}
