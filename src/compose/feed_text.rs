use crate::{
    compose::chrome,
    compose::template::{ComposeInput, Template},
    compose::text::{FEED_BULLET, FlowStyle, MarkStyle, estimate_height},
    compose::tree::{Element, Geometry, LayerKind, Length, VisualTree},
    foundation::core::REFERENCE_WIDTH,
    markup::split::title_block_count,
    model::settings::ContentLayout,
};

/// Social-post look: a profile header, then text and image in one content column.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeedText;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    TextFirst,
    ImageFirst,
    TitleImageBody,
}

fn order(layout: ContentLayout) -> Order {
    match layout {
        ContentLayout::TextFirst => Order::TextFirst,
        ContentLayout::ImageFirst => Order::ImageFirst,
        ContentLayout::TitleImageBody => Order::TitleImageBody,
        ContentLayout::Other => {
            tracing::debug!("unrecognized content layout, using text-first");
            Order::TextFirst
        }
    }
}

impl Template for FeedText {
    fn compose(&self, input: &ComposeInput<'_>) -> VisualTree {
        let layout = input.layout;
        let palette = input.palette();
        let mut tree = input.new_tree(&palette);
        let style = FlowStyle {
            layout,
            sizes: input.sizes(),
            palette: &palette,
            mark: MarkStyle::Highlight,
            bullet: FEED_BULLET,
        };

        chrome::background(&mut tree, input);
        let header_bottom = chrome::feed_header(&mut tree, input, &palette);
        chrome::pagination_badge(&mut tree, input, &palette);

        let pad = layout.content_padding;
        let spacing = layout.image_text_spacing;
        let column_width = REFERENCE_WIDTH - 2.0 * pad;
        let content_top = Length::px(header_bottom + chrome::FEED_HEADER_GAP);
        let content_bottom = Length::FULL - Length::px(pad + chrome::PAGINATION_BAND);

        let text_box = |top: Length, height: Length| {
            Geometry::new(
                Length::px(pad),
                top,
                Length::FULL - Length::px(2.0 * pad),
                height,
            )
        };
        let inset = pad + layout.image_margin;
        let image_box = |top: Length| {
            Geometry::new(
                Length::px(inset),
                top,
                Length::FULL - Length::px(2.0 * inset),
                Length::pct(layout.image_scale),
            )
            .with_offset(chrome::canvas_offset(input))
        };

        if !input.has_illustration() {
            let flow = style.flow(input.blocks);
            tree.push(LayerKind::Text, "text", text_box(content_top, content_bottom - content_top))
                .child(Element::Text(flow));
            return tree;
        }

        match order(layout.content_layout) {
            Order::TextFirst => {
                let flow = style.flow(input.blocks);
                let text_h = estimate_height(&flow, column_width);
                tree.push(LayerKind::Text, "text", text_box(content_top, Length::px(text_h)))
                    .child(Element::Text(flow));
                let image_top = content_top + Length::px(text_h + spacing);
                chrome::illustration(
                    &mut tree,
                    input,
                    &palette,
                    image_box(image_top),
                    chrome::FEED_IMAGE_RADIUS,
                );
            }
            Order::ImageFirst => {
                let image = image_box(content_top);
                chrome::illustration(&mut tree, input, &palette, image, chrome::FEED_IMAGE_RADIUS);
                let text_top = image.bottom() + Length::px(spacing);
                tree.push(LayerKind::Text, "text", text_box(text_top, content_bottom - text_top))
                    .child(Element::Text(style.flow(input.blocks)));
            }
            Order::TitleImageBody => {
                let (title, body) = input.blocks.split_at(title_block_count(input.blocks));
                let mut image_top = content_top;
                if !title.is_empty() {
                    let flow = style.flow(title);
                    let title_h = estimate_height(&flow, column_width);
                    tree.push(LayerKind::Text, "title", text_box(content_top, Length::px(title_h)))
                        .child(Element::Text(flow));
                    image_top = content_top + Length::px(title_h + spacing);
                }
                let image = image_box(image_top);
                chrome::illustration(&mut tree, input, &palette, image, chrome::FEED_IMAGE_RADIUS);
                let text_top = image.bottom() + Length::px(spacing);
                tree.push(LayerKind::Text, "text", text_box(text_top, content_bottom - text_top))
                    .child(Element::Text(style.flow(body)));
            }
        }
        tree
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/feed_text.rs"]
mod tests;
