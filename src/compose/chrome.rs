//! Layers shared between templates: backgrounds, illustrations, headers and footers.

use crate::{
    compose::palette::Palette,
    compose::template::ComposeInput,
    compose::tree::{
        Axis, Element, Geometry, Indicator, LayerKind, Length, LoadState, Paint, StackAlign,
        VisualTree,
    },
    foundation::core::{Color, FrameSize, Vec2},
};

pub const FEED_AVATAR: f64 = 96.0;
pub const FEED_NAME: f64 = 34.0;
pub const FEED_HANDLE: f64 = 30.0;
pub const FEED_BADGE: f64 = 30.0;
/// Gap between the feed header and the content column.
pub const FEED_HEADER_GAP: f64 = 32.0;
/// Height reserved above the bottom padding for the pagination badge.
pub const PAGINATION_BAND: f64 = 56.0;
pub const FEED_IMAGE_RADIUS: f64 = 24.0;

pub const FOOTER_AVATAR: f64 = 56.0;
pub const FOOTER_HANDLE: f64 = 28.0;
pub const FOOTER_BADGE: f64 = 26.0;
pub const FOOTER_PAGE: f64 = 24.0;
const FOOTER_GAP: f64 = 12.0;
/// Shortest text band kept on a portrait frame, in reference px.
pub const MIN_TEXT_BAND: f64 = 160.0;

/// Full-bleed background image plus its colour overlay, when the slide has one.
pub fn background(tree: &mut VisualTree, input: &ComposeInput<'_>) {
    let Some(bg) = &input.slide.background_image else {
        return;
    };
    tree.push(LayerKind::BackgroundImage, "background", Geometry::FULL)
        .child(Element::Image {
            source: bg.url.clone(),
            focal_y: 50.0,
            load: LoadState::Pending,
        });
    let overlay = input
        .layout
        .overlay_color
        .with_alpha_pct(input.layout.overlay_opacity);
    tree.push(LayerKind::BackgroundOverlay, "overlay", Geometry::FULL)
        .fill(Paint::Solid { color: overlay });
}

/// The illustration layer: the slide image, or a generating placeholder when the slide
/// wants an image it does not have yet.
pub fn illustration(
    tree: &mut VisualTree,
    input: &ComposeInput<'_>,
    palette: &Palette,
    geometry: Geometry,
    radius: f64,
) {
    let child = match &input.slide.image_url {
        Some(source) => Element::Image {
            source: source.clone(),
            focal_y: input.layout.image_offset_y,
            load: LoadState::Pending,
        },
        None => Element::Placeholder {
            indicator: Indicator::Generating,
            surface: palette.surface,
            ink: palette.ink,
        },
    };
    tree.push(LayerKind::Illustration, "illustration", geometry)
        .radius(radius)
        .child(child);
}

/// Top and height of a text band running from `top` to `bottom`.
///
/// When the illustration leaves less than [`MIN_TEXT_BAND`] on the portrait frame, the band
/// is pulled up over the image so the text stays visible.
pub fn text_band(top: Length, bottom: Length) -> (Length, Length) {
    let height = bottom - top;
    let portrait_px = height.to_ref_px(f64::from(FrameSize::PORTRAIT.height));
    if portrait_px >= MIN_TEXT_BAND {
        return (top, height);
    }
    tracing::debug!(
        band_px = portrait_px,
        "text band squeezed by the illustration, raising it to the minimum height"
    );
    (bottom - Length::px(MIN_TEXT_BAND), Length::px(MIN_TEXT_BAND))
}

/// Canvas offset as a layer translation.
pub fn canvas_offset(input: &ComposeInput<'_>) -> Vec2 {
    Vec2::new(0.0, input.layout.image_canvas_offset)
}

/// Fade from transparent to `to` at `opacity` percent, over the bottom `height_pct` of a
/// band that ends at `band_bottom_pct`.
pub fn gradient(tree: &mut VisualTree, band_bottom_pct: f64, height_pct: f64, to: Color, opacity: f64) {
    let height = band_bottom_pct * height_pct / 100.0;
    let geometry = Geometry::new(
        Length::ZERO,
        Length::pct(band_bottom_pct - height),
        Length::FULL,
        Length::pct(height),
    );
    tree.push(LayerKind::Gradient, "gradient", geometry)
        .fill(Paint::VerticalGradient {
            top: to.with_alpha_pct(0.0),
            bottom: to.with_alpha_pct(opacity),
        });
}

fn avatar(input: &ComposeInput<'_>, palette: &Palette, diameter: f64) -> Element {
    Element::Avatar {
        source: input.profile.avatar_url.clone(),
        diameter,
        load: LoadState::Pending,
        fallback: palette.surface,
    }
}

/// Feed header: avatar, then name (+ badge) above the handle. Returns its bottom edge in
/// reference px.
pub fn feed_header(tree: &mut VisualTree, input: &ComposeInput<'_>, palette: &Palette) -> f64 {
    let pad = input.layout.content_padding;
    let hs = input.layout.header_scale;
    let height = FEED_AVATAR * hs;

    let mut name_row = vec![Element::Label {
        text: input.profile.name.clone(),
        size: FEED_NAME * hs,
        bold: true,
        color: palette.text,
    }];
    if input.layout.show_verified_badge {
        name_row.push(Element::VerifiedBadge {
            size: FEED_BADGE * hs,
            color: palette.badge,
        });
    }

    let identity = Element::Stack {
        axis: Axis::Column,
        gap: 4.0 * hs,
        align: StackAlign::Start,
        items: vec![
            Element::Stack {
                axis: Axis::Row,
                gap: 8.0 * hs,
                align: StackAlign::Start,
                items: name_row,
            },
            Element::Label {
                text: input.profile.at_handle(),
                size: FEED_HANDLE * hs,
                bold: false,
                color: palette.muted,
            },
        ],
    };

    let geometry = Geometry::new(
        Length::px(pad),
        Length::px(pad),
        Length::FULL - Length::px(2.0 * pad),
        Length::px(height),
    );
    tree.push(LayerKind::Header, "header", geometry)
        .child(Element::Stack {
            axis: Axis::Row,
            gap: 24.0 * hs,
            align: StackAlign::Start,
            items: vec![avatar(input, palette, FEED_AVATAR * hs), identity],
        });
    pad + height
}

/// `i/n` badge in the bottom-right corner.
pub fn pagination_badge(tree: &mut VisualTree, input: &ComposeInput<'_>, palette: &Palette) {
    if !input.layout.show_slide_numbers {
        return;
    }
    let pad = input.layout.content_padding;
    let (i, n) = input.page();
    let (w, h) = (120.0, 48.0);
    let geometry = Geometry::new(
        Length::FULL - Length::px(pad + w),
        Length::FULL - Length::px(pad + h),
        Length::px(w),
        Length::px(h),
    );
    tree.push(LayerKind::Pagination, "pagination", geometry)
        .fill(Paint::Solid {
            color: palette.surface,
        })
        .radius(h / 2.0)
        .child(Element::Stack {
            axis: Axis::Row,
            gap: 0.0,
            align: StackAlign::Center,
            items: vec![Element::Label {
                text: format!("{i}/{n}"),
                size: 26.0,
                bold: true,
                color: palette.muted,
            }],
        });
}

/// Height of the centered footer in reference px.
pub fn footer_height(input: &ComposeInput<'_>) -> f64 {
    let row = FOOTER_AVATAR * input.layout.header_scale;
    if input.layout.show_slide_numbers {
        row + FOOTER_GAP + FOOTER_PAGE * 1.2
    } else {
        row
    }
}

/// Centered footer: `[avatar, @handle, badge]` above the `i / n` label. Returns the
/// footer's top edge.
pub fn centered_footer(tree: &mut VisualTree, input: &ComposeInput<'_>, palette: &Palette) -> Length {
    let pad = input.layout.content_padding;
    let hs = input.layout.header_scale;
    let height = footer_height(input);

    let mut row = vec![
        avatar(input, palette, FOOTER_AVATAR * hs),
        Element::Label {
            text: input.profile.at_handle(),
            size: FOOTER_HANDLE * hs,
            bold: true,
            color: palette.text,
        },
    ];
    if input.layout.show_verified_badge {
        row.push(Element::VerifiedBadge {
            size: FOOTER_BADGE * hs,
            color: palette.badge,
        });
    }

    let mut items = vec![Element::Stack {
        axis: Axis::Row,
        gap: 16.0 * hs,
        align: StackAlign::Center,
        items: row,
    }];
    if input.layout.show_slide_numbers {
        let (i, n) = input.page();
        items.push(Element::Label {
            text: format!("{i} / {n}"),
            size: FOOTER_PAGE,
            bold: false,
            color: palette.muted,
        });
    }

    let top = Length::FULL - Length::px(pad + height);
    let geometry = Geometry::new(Length::ZERO, top, Length::FULL, Length::px(height));
    tree.push(LayerKind::Footer, "footer", geometry)
        .child(Element::Stack {
            axis: Axis::Column,
            gap: FOOTER_GAP,
            align: StackAlign::Center,
            items,
        });
    top
}
