use crate::{
    compose::chrome,
    compose::palette::Palette,
    compose::template::{ComposeInput, Template},
    compose::text::{FlowStyle, MarkStyle, SOLID_BULLET},
    compose::tree::{Element, Geometry, LayerKind, Length, VisualTree},
};

/// How far the text of an overlay-mode slide reaches up into the image band, in percent of
/// the frame height.
pub const OVERLAY_TEXT_RISE_PCT: f64 = 5.0;

/// Large illustration band at the top, text below it or over a fade, centered footer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CinematicImage;

/// Illustration band (plus gradient in overlay mode). Returns where the text starts.
///
/// Shared with the lesson cover, which uses the same band.
pub(crate) fn band(tree: &mut VisualTree, input: &ComposeInput<'_>, palette: &Palette) -> Length {
    let layout = input.layout;
    let scale = layout.image_scale;
    let margin = layout.image_margin;
    let geometry = Geometry::new(
        Length::px(margin),
        Length::ZERO,
        Length::FULL - Length::px(2.0 * margin),
        Length::pct(scale),
    )
    .with_offset(chrome::canvas_offset(input));
    chrome::illustration(tree, input, palette, geometry, 0.0);

    if layout.overlay_mode {
        chrome::gradient(
            tree,
            scale,
            layout.gradient_height,
            palette.background,
            layout.gradient_opacity,
        );
        Length::pct((scale - OVERLAY_TEXT_RISE_PCT).max(0.0))
    } else {
        Length::pct(scale) + Length::px(layout.image_text_spacing)
    }
}

impl Template for CinematicImage {
    fn compose(&self, input: &ComposeInput<'_>) -> VisualTree {
        let layout = input.layout;
        let palette = input.palette();
        let mut tree = input.new_tree(&palette);
        let style = FlowStyle {
            layout,
            sizes: input.sizes(),
            palette: &palette,
            mark: MarkStyle::Underline,
            bullet: SOLID_BULLET,
        };

        chrome::background(&mut tree, input);
        let text_top = if input.has_illustration() {
            band(&mut tree, input, &palette)
        } else {
            Length::px(layout.content_padding)
        };
        let footer_top = chrome::centered_footer(&mut tree, input, &palette);

        let pad = layout.content_padding;
        let text_bottom = footer_top - Length::px(layout.image_text_spacing);
        let (text_top, text_height) = chrome::text_band(text_top, text_bottom);
        let geometry = Geometry::new(
            Length::px(pad),
            text_top,
            Length::FULL - Length::px(2.0 * pad),
            text_height,
        );
        tree.push(LayerKind::Text, "text", geometry)
            .child(Element::Text(style.flow(input.blocks)));
        tree
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/cinematic.rs"]
mod tests;
