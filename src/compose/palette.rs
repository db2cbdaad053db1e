use crate::{
    foundation::core::Color,
    layout::resolve::ResolvedLayout,
    model::settings::{TemplateKind, Theme},
};

/// Colours of one rendered slide after theme, accent and background-image resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    /// Placeholder and avatar-fallback fill.
    pub surface: Color,
    /// Spinner colour drawn on `surface`.
    pub ink: Color,
    pub accent: Option<Color>,
    /// Badge fill; the accent or the default accent colour.
    pub badge: Color,
}

const DEFAULT_ACCENT: Color = Color::rgb(0x1d, 0x9b, 0xf0);

impl Palette {
    pub fn new(template: TemplateKind, theme: Theme, accent: Option<Color>) -> Self {
        let badge = accent.unwrap_or(DEFAULT_ACCENT);
        match (template, theme) {
            (TemplateKind::Lesson, Theme::Light) => Self {
                background: Color::WHITE,
                text: Color::BLACK,
                muted: Color::BLACK,
                surface: Color::BLACK,
                ink: Color::WHITE,
                accent,
                badge,
            },
            (TemplateKind::Lesson, Theme::Dark) => Self {
                background: Color::BLACK,
                text: Color::WHITE,
                muted: Color::WHITE,
                surface: Color::WHITE,
                ink: Color::BLACK,
                accent,
                badge,
            },
            (_, Theme::Light) => Self {
                background: if template == TemplateKind::CinematicImage {
                    Color::rgb(0xf5, 0xf5, 0xf4)
                } else {
                    Color::WHITE
                },
                text: Color::rgb(0x0f, 0x14, 0x19),
                muted: Color::rgb(0x53, 0x64, 0x71),
                surface: Color::rgb(0xef, 0xf3, 0xf4),
                ink: Color::rgb(0x53, 0x64, 0x71),
                accent,
                badge,
            },
            (_, Theme::Dark) => Self {
                background: if template == TemplateKind::CinematicImage {
                    Color::rgb(0x0b, 0x0b, 0x0c)
                } else {
                    Color::BLACK
                },
                text: Color::rgb(0xe7, 0xe9, 0xea),
                muted: Color::rgb(0x71, 0x76, 0x7b),
                surface: Color::rgb(0x16, 0x18, 0x1c),
                ink: Color::rgb(0x71, 0x76, 0x7b),
                accent,
                badge,
            },
        }
    }

    /// Palette for a resolved slide; a background image forces the overlay text colour.
    pub fn for_layout(
        template: TemplateKind,
        layout: &ResolvedLayout,
        has_background_image: bool,
    ) -> Self {
        let mut palette = Self::new(template, layout.theme, layout.accent);
        if has_background_image {
            palette.text = layout.overlay_text_color;
            palette.muted = if template == TemplateKind::Lesson {
                layout.overlay_text_color
            } else {
                layout.overlay_text_color.scale_alpha(0.75)
            };
        }
        palette
    }

    /// Colour of strong runs and list markers.
    pub fn strong(&self) -> Color {
        self.accent.unwrap_or(self.text)
    }

    /// Background behind `mark` runs.
    pub fn mark(&self) -> Color {
        match self.accent {
            Some(accent) => accent.with_alpha_pct(25.0),
            None => self.text.with_alpha_pct(15.0),
        }
    }
}
