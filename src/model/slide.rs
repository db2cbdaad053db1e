use crate::foundation::core::Color;
use crate::model::settings::{ContentLayout, FontStyle, TextAlign, Theme};

/// Opaque image reference: a project-relative path, a `data:` URI, or any other URI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Wrap a reference string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The raw reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Role of a slide inside the carousel. Only the lesson template distinguishes roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideRole {
    /// Opening slide.
    Cover,
    /// Regular content slide.
    #[default]
    Content,
    /// Closing call-to-action slide.
    #[serde(alias = "call-to-action")]
    Cta,
}

/// Full-bleed background image with a colour overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    /// Image to stretch over the whole frame.
    pub url: ImageRef,
    /// Overlay colour drawn over the image.
    #[serde(default)]
    pub overlay_color: Option<Color>,
    /// Overlay opacity in percent.
    #[serde(default)]
    pub overlay_opacity: Option<f64>,
    /// Text colour used on top of the overlay.
    #[serde(default)]
    pub text_color: Option<Color>,
}

/// One unit of the carousel. Every `Option` is a per-slide override of a global setting or a
/// hard default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    pub role: SlideRole,
    /// Raw markdown-like content.
    pub content: String,
    pub image_url: Option<ImageRef>,
    pub show_image: bool,
    /// Illustration band height, percent of frame height.
    pub image_scale: Option<f64>,
    /// Vertical crop focal point of the illustration, percent (50 = centered).
    pub image_offset_y: Option<f64>,
    /// Vertical translate of the illustration, reference px.
    pub image_canvas_offset: Option<f64>,
    pub image_margin: Option<f64>,
    /// `true` = overlay with gradient fade, `false` = split with hard edge.
    pub overlay_mode: Option<bool>,
    pub background_image: Option<BackgroundImage>,
    pub content_padding: Option<f64>,
    pub line_height: Option<f64>,
    pub paragraph_gap: Option<f64>,
    pub text_align: Option<TextAlign>,
    pub font_style: Option<FontStyle>,
    pub font_scale: Option<f64>,
    pub content_layout: Option<ContentLayout>,
    pub image_text_spacing: Option<f64>,
    pub gradient_height: Option<f64>,
    pub gradient_opacity: Option<f64>,
    pub theme: Option<Theme>,
}

impl Default for Slide {
    fn default() -> Self {
        Self {
            id: String::new(),
            role: SlideRole::Content,
            content: String::new(),
            image_url: None,
            show_image: true,
            image_scale: None,
            image_offset_y: None,
            image_canvas_offset: None,
            image_margin: None,
            overlay_mode: None,
            background_image: None,
            content_padding: None,
            line_height: None,
            paragraph_gap: None,
            text_align: None,
            font_style: None,
            font_scale: None,
            content_layout: None,
            image_text_spacing: None,
            gradient_height: None,
            gradient_opacity: None,
            theme: None,
        }
    }
}

impl Slide {
    /// A content slide with no image and no overrides.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            show_image: false,
            ..Self::default()
        }
    }

    /// Whether the slide wants an illustration region at all.
    pub fn wants_illustration(&self) -> bool {
        self.show_image
    }
}
