use crate::foundation::core::Color;
use crate::model::slide::ImageRef;

/// Colour theme of a rendered slide.
///
/// This is the slide content theme only; the editor chrome theme lives on
/// [`crate::Project::editor_theme`] and never reaches the composer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

/// Horizontal alignment of text lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified; lines are set flush left.
    Justify,
}

/// Named font style; each maps to a font family stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Geometric sans.
    #[default]
    Modern,
    /// Serif display face.
    Classic,
    /// Monospace.
    Mono,
    /// Rounded sans.
    Rounded,
    /// Any unrecognized style name; resolves like [`FontStyle::Modern`].
    #[serde(other)]
    Other,
}

/// Ordering of text and image inside a feed-text slide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentLayout {
    /// All text, then the image.
    #[default]
    TextFirst,
    /// The image, then all text.
    ImageFirst,
    /// Leading headings, then the image, then the remaining body.
    TitleImageBody,
    /// Any unrecognized layout name; composers fall back to their default.
    #[serde(other)]
    Other,
}

/// The closed set of composition templates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Social-post look: header row, text and image in a content column.
    #[default]
    FeedText,
    /// Large illustration band with text below or over a fade.
    CinematicImage,
    /// Black/white lesson deck with a distinguished cover slide.
    Lesson,
}

impl TemplateKind {
    /// All templates, in declaration order.
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::FeedText,
        TemplateKind::CinematicImage,
        TemplateKind::Lesson,
    ];

    /// Stable kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::FeedText => "feed-text",
            TemplateKind::CinematicImage => "cinematic-image",
            TemplateKind::Lesson => "lesson",
        }
    }
}

/// Global layout knobs shared by every slide unless a slide overrides them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    /// Horizontal/vertical content inset in reference px.
    pub content_padding: Option<f64>,
    /// Vertical translate of the illustration in reference px.
    pub image_canvas_offset: Option<f64>,
    /// Extra horizontal inset of the illustration in reference px.
    pub image_margin: Option<f64>,
    /// Line height multiplier.
    pub line_height: Option<f64>,
    /// Gap between paragraphs, in units of 16 reference px.
    pub paragraph_gap: Option<f64>,
    /// Text alignment.
    pub text_align: Option<TextAlign>,
}

/// Presentation settings shared by reference across all slides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Composition template for every slide.
    pub template: TemplateKind,
    /// Slide theme.
    pub theme: Theme,
    /// Accent colour.
    pub accent_color: Color,
    /// Whether the accent colour is applied.
    pub accent_enabled: bool,
    /// Show the `i/n` pagination.
    pub show_slide_numbers: bool,
    /// Show the verified badge next to the profile name.
    pub show_verified_badge: bool,
    /// Scale of header/footer branding.
    pub header_scale: f64,
    /// Global font style.
    pub font_style: Option<FontStyle>,
    /// Global font scale.
    pub font_scale: Option<f64>,
    /// Global layout knobs.
    pub layout: LayoutSettings,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            template: TemplateKind::FeedText,
            theme: Theme::Light,
            accent_color: Color::rgb(0x1d, 0x9b, 0xf0),
            accent_enabled: false,
            show_slide_numbers: true,
            show_verified_badge: true,
            header_scale: 1.0,
            font_style: None,
            font_scale: None,
            layout: LayoutSettings::default(),
        }
    }
}

/// Author identity shown in headers and footers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Handle, with or without a leading `@`.
    pub handle: String,
    /// Avatar image.
    pub avatar_url: Option<ImageRef>,
}

impl Profile {
    /// Handle with exactly one leading `@`.
    pub fn at_handle(&self) -> String {
        format!("@{}", self.handle.trim().trim_start_matches('@'))
    }
}
