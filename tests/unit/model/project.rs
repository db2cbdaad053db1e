use super::*;
use crate::{ContentLayout, FontStyle, SlideRole, TemplateKind};

const SAMPLE: &str = r##"{
  "profile": { "name": "Ada", "handle": "ada", "avatarUrl": "avatar.png" },
  "settings": {
    "template": "cinematic-image",
    "theme": "dark",
    "accentColor": "#ff5500",
    "accentEnabled": true,
    "layout": { "contentPadding": 80 }
  },
  "slides": [
    { "id": "s1", "role": "cover", "content": "# Hook", "imageScale": 45 },
    { "id": "s2", "role": "call-to-action", "content": "Follow", "contentLayout": "zigzag", "fontStyle": "gothic" }
  ],
  "editorTheme": "light"
}"##;

#[test]
fn parses_camel_case_project() {
    let p = Project::from_json_str(SAMPLE).unwrap();
    assert_eq!(p.settings.template, TemplateKind::CinematicImage);
    assert_eq!(p.settings.theme, Theme::Dark);
    assert_eq!(p.settings.layout.content_padding, Some(80.0));
    assert_eq!(p.slides[0].role, SlideRole::Cover);
    assert_eq!(p.slides[0].image_scale, Some(45.0));
    assert!(p.slides[0].show_image);
    assert_eq!(p.editor_theme, Theme::Light);
}

#[test]
fn unknown_layout_and_font_names_deserialize_to_fallback_variants() {
    let p = Project::from_json_str(SAMPLE).unwrap();
    assert_eq!(p.slides[1].role, SlideRole::Cta);
    assert_eq!(p.slides[1].content_layout, Some(ContentLayout::Other));
    assert_eq!(p.slides[1].font_style, Some(FontStyle::Other));
}

#[test]
fn unknown_template_is_rejected_at_the_boundary() {
    let err = Project::from_json_str(r#"{ "settings": { "template": "vaporwave" } }"#)
        .unwrap_err();
    assert!(matches!(err, CarouselError::Serde(_)));
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let mut p = Project::default();
    p.slides.push(Slide::new("a", "x"));
    p.slides.push(Slide::new("a", "y"));
    assert!(p.validate().unwrap_err().to_string().contains("duplicate"));

    p.slides[1].id = " ".to_string();
    assert!(p.validate().unwrap_err().to_string().contains("empty id"));
}

#[test]
fn image_refs_build_from_owned_and_borrowed_strings() {
    use crate::ImageRef;

    let owned = ImageRef::from(format!("img-{}.png", 3));
    assert_eq!(owned, ImageRef::from("img-3.png"));
    assert_eq!(owned.as_str(), "img-3.png");

    let mut slide = Slide::new("s", "");
    slide.image_url = Some(String::from("photo.png").into());
    assert_eq!(slide.image_url.unwrap().as_str(), "photo.png");
}
