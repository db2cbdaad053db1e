use crate::{
    foundation::core::Color,
    layout::typography::font_family,
    model::settings::{ContentLayout, FontStyle, GlobalSettings, TemplateKind, TextAlign, Theme},
    model::slide::Slide,
};

/// Hard defaults at the bottom of the override cascade.
pub mod defaults {
    use crate::foundation::core::Color;
    use crate::model::settings::TemplateKind;

    pub const CONTENT_PADDING: f64 = 64.0;
    pub const LINE_HEIGHT: f64 = 1.5;
    pub const PARAGRAPH_GAP: f64 = 1.0;
    pub const FONT_SCALE: f64 = 1.0;
    pub const IMAGE_OFFSET_Y: f64 = 50.0;
    pub const IMAGE_CANVAS_OFFSET: f64 = 0.0;
    pub const IMAGE_MARGIN: f64 = 0.0;
    pub const IMAGE_TEXT_SPACING: f64 = 24.0;
    pub const GRADIENT_HEIGHT: f64 = 60.0;
    pub const GRADIENT_OPACITY: f64 = 100.0;
    pub const OVERLAY_COLOR: Color = Color::BLACK;
    pub const OVERLAY_OPACITY: f64 = 50.0;
    pub const OVERLAY_TEXT_COLOR: Color = Color::WHITE;
    pub const OVERLAY_MODE: bool = true;

    /// Illustration band height in percent of the frame.
    pub fn image_scale(template: TemplateKind) -> f64 {
        match template {
            TemplateKind::FeedText => 50.0,
            TemplateKind::CinematicImage => 45.0,
            TemplateKind::Lesson => 50.0,
        }
    }
}

/// Every layout parameter of one slide after the per-slide -> global -> default cascade.
///
/// Recomputed on every render and never persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLayout {
    pub template: TemplateKind,
    pub theme: Theme,
    pub content_padding: f64,
    pub line_height: f64,
    /// Paragraph gap in units of [`crate::layout::typography::GAP_UNIT_PX`].
    pub paragraph_gap: f64,
    pub text_align: TextAlign,
    pub font_style: FontStyle,
    pub font_family: String,
    pub font_scale: f64,
    pub image_scale: f64,
    pub image_offset_y: f64,
    pub image_canvas_offset: f64,
    pub image_margin: f64,
    pub image_text_spacing: f64,
    pub gradient_height: f64,
    pub gradient_opacity: f64,
    pub overlay_color: Color,
    pub overlay_opacity: f64,
    pub overlay_text_color: Color,
    /// May still be [`ContentLayout::Other`]; each template maps that to its own default.
    pub content_layout: ContentLayout,
    pub overlay_mode: bool,
    pub show_image: bool,
    pub header_scale: f64,
    /// Accent colour, present only when the accent is enabled.
    pub accent: Option<Color>,
    pub show_slide_numbers: bool,
    pub show_verified_badge: bool,
}

/// First defined value of slide override, global setting, hard default.
pub fn cascade<T>(slide: Option<T>, global: Option<T>, default: T) -> T {
    slide.or(global).unwrap_or(default)
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn cascade_num(
    slide: Option<f64>,
    global: Option<f64>,
    default: f64,
    (lo, hi): (f64, f64),
) -> f64 {
    cascade(finite(slide), finite(global), default).clamp(lo, hi)
}

const PCT: (f64, f64) = (0.0, 100.0);
const PX: (f64, f64) = (0.0, 1080.0);
const SIGNED_PX: (f64, f64) = (-2160.0, 2160.0);

/// Merge per-slide overrides, global settings and hard defaults for one slide.
///
/// Pure and total: identical inputs always produce identical output, and every field is
/// defined regardless of which overrides are present.
#[tracing::instrument(skip_all, fields(slide = %slide.id))]
pub fn resolve_layout(slide: &Slide, global: &GlobalSettings) -> ResolvedLayout {
    let template = global.template;
    let gl = &global.layout;
    let bg = slide.background_image.as_ref();

    let requested_font = cascade(slide.font_style, global.font_style, FontStyle::Modern);
    let font_style = match requested_font {
        FontStyle::Other => {
            tracing::debug!("unrecognized font style, using modern");
            FontStyle::Modern
        }
        other => other,
    };

    ResolvedLayout {
        template,
        theme: cascade(slide.theme, Some(global.theme), Theme::Light),
        content_padding: cascade_num(
            slide.content_padding,
            gl.content_padding,
            defaults::CONTENT_PADDING,
            PX,
        ),
        line_height: cascade_num(
            slide.line_height,
            gl.line_height,
            defaults::LINE_HEIGHT,
            (0.8, 3.0),
        ),
        paragraph_gap: cascade_num(
            slide.paragraph_gap,
            gl.paragraph_gap,
            defaults::PARAGRAPH_GAP,
            (0.0, 16.0),
        ),
        text_align: cascade(slide.text_align, gl.text_align, TextAlign::Left),
        font_style,
        font_family: font_family(font_style).to_string(),
        font_scale: cascade_num(
            slide.font_scale,
            global.font_scale,
            defaults::FONT_SCALE,
            (0.25, 4.0),
        ),
        image_scale: cascade_num(
            slide.image_scale,
            None,
            defaults::image_scale(template),
            PCT,
        ),
        image_offset_y: cascade_num(slide.image_offset_y, None, defaults::IMAGE_OFFSET_Y, PCT),
        image_canvas_offset: cascade_num(
            slide.image_canvas_offset,
            gl.image_canvas_offset,
            defaults::IMAGE_CANVAS_OFFSET,
            SIGNED_PX,
        ),
        image_margin: cascade_num(
            slide.image_margin,
            gl.image_margin,
            defaults::IMAGE_MARGIN,
            PX,
        ),
        image_text_spacing: cascade_num(
            slide.image_text_spacing,
            None,
            defaults::IMAGE_TEXT_SPACING,
            PX,
        ),
        gradient_height: cascade_num(
            slide.gradient_height,
            None,
            defaults::GRADIENT_HEIGHT,
            PCT,
        ),
        gradient_opacity: cascade_num(
            slide.gradient_opacity,
            None,
            defaults::GRADIENT_OPACITY,
            PCT,
        ),
        overlay_color: cascade(
            bg.and_then(|b| b.overlay_color),
            None,
            defaults::OVERLAY_COLOR,
        ),
        overlay_opacity: cascade_num(
            bg.and_then(|b| b.overlay_opacity),
            None,
            defaults::OVERLAY_OPACITY,
            PCT,
        ),
        overlay_text_color: cascade(
            bg.and_then(|b| b.text_color),
            None,
            defaults::OVERLAY_TEXT_COLOR,
        ),
        content_layout: cascade(slide.content_layout, None, ContentLayout::TextFirst),
        overlay_mode: cascade(slide.overlay_mode, None, defaults::OVERLAY_MODE),
        show_image: slide.show_image,
        header_scale: if global.header_scale.is_finite() {
            global.header_scale.clamp(0.25, 4.0)
        } else {
            1.0
        },
        accent: global.accent_enabled.then_some(global.accent_color),
        show_slide_numbers: global.show_slide_numbers,
        show_verified_badge: global.show_verified_badge,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolve.rs"]
mod tests;
