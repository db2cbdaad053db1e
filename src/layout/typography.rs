use crate::model::settings::{FontStyle, TemplateKind};
use crate::model::slide::SlideRole;

/// One paragraph-gap unit, in reference px.
pub const GAP_UNIT_PX: f64 = 16.0;

/// Font sizes of the three text levels, in reference px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TypeScale {
    pub h1: f64,
    pub h2: f64,
    pub body: f64,
}

impl TypeScale {
    /// Base sizes for a template, before the font-scale factor.
    pub fn base(template: TemplateKind, role: SlideRole) -> Self {
        match (template, role) {
            (TemplateKind::FeedText, _) => Self {
                h1: 60.0,
                h2: 46.0,
                body: 38.0,
            },
            (TemplateKind::CinematicImage, _) => Self {
                h1: 72.0,
                h2: 52.0,
                body: 40.0,
            },
            (TemplateKind::Lesson, SlideRole::Cover) => Self {
                h1: 84.0,
                h2: 52.0,
                body: 38.0,
            },
            (TemplateKind::Lesson, _) => Self {
                h1: 64.0,
                h2: 48.0,
                body: 38.0,
            },
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            h1: self.h1 * factor,
            h2: self.h2 * factor,
            body: self.body * factor,
        }
    }
}

/// CSS-style family stack for a font style. Unknown styles use the modern stack.
pub fn font_family(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Modern | FontStyle::Other => "Inter, Helvetica, Arial, sans-serif",
        FontStyle::Classic => "Playfair Display, Georgia, serif",
        FontStyle::Mono => "JetBrains Mono, Menlo, monospace",
        FontStyle::Rounded => "Nunito, Arial Rounded MT Bold, sans-serif",
    }
}

/// Paragraph gap in reference px.
pub fn gap_px(units: f64) -> f64 {
    units * GAP_UNIT_PX
}

/// Height of a blank-line spacer: half the paragraph gap.
pub fn spacer_px(units: f64) -> f64 {
    gap_px(units) * 0.5
}
