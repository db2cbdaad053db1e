use crate::{
    compose::chrome,
    compose::cinematic,
    compose::template::{ComposeInput, Template},
    compose::text::{FlowStyle, MarkStyle, SOLID_BULLET, estimate_height},
    compose::tree::{Element, Geometry, LayerKind, Length, TextFlow, VerticalAlign, VisualTree},
    foundation::core::REFERENCE_WIDTH,
    markup::split::title_block_count,
    model::settings::TextAlign,
    model::slide::SlideRole,
};

const LESSON_IMAGE_RADIUS: f64 = 16.0;

/// Black/white teaching deck: cinematic cover, title-image-body content, centered CTA.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lesson;

impl Template for Lesson {
    fn compose(&self, input: &ComposeInput<'_>) -> VisualTree {
        let layout = input.layout;
        let palette = input.palette();
        let mut tree = input.new_tree(&palette);
        let style = FlowStyle {
            layout,
            sizes: input.sizes(),
            palette: &palette,
            mark: MarkStyle::Highlight,
            bullet: SOLID_BULLET,
        };

        chrome::background(&mut tree, input);
        let footer_top = chrome::centered_footer(&mut tree, input, &palette);

        let pad = layout.content_padding;
        let spacing = layout.image_text_spacing;
        let column_width = REFERENCE_WIDTH - 2.0 * pad;
        let content_top = Length::px(pad);
        let content_bottom = footer_top - Length::px(spacing);
        let text_box = |top: Length, height: Length| {
            Geometry::new(
                Length::px(pad),
                top,
                Length::FULL - Length::px(2.0 * pad),
                height,
            )
        };

        if input.slide.role == SlideRole::Cover {
            let text_top = if input.has_illustration() {
                cinematic::band(&mut tree, input, &palette)
            } else {
                content_top
            };
            let (top, height) = chrome::text_band(text_top, content_bottom);
            tree.push(LayerKind::Text, "text", text_box(top, height))
                .child(Element::Text(style.flow(input.blocks)));
            return tree;
        }

        let cta = input.slide.role == SlideRole::Cta;
        let finish = |flow: &mut TextFlow| {
            if cta {
                flow.align = TextAlign::Center;
                flow.valign = VerticalAlign::Center;
            }
        };

        if !input.has_illustration() {
            let mut flow = style.flow(input.blocks);
            finish(&mut flow);
            tree.push(LayerKind::Text, "text", text_box(content_top, content_bottom - content_top))
                .child(Element::Text(flow));
            return tree;
        }

        // Any image on a non-cover slide goes between the title and the body.
        let (title, body) = input.blocks.split_at(title_block_count(input.blocks));
        let mut image_top = content_top;
        if !title.is_empty() {
            let mut flow = style.flow(title);
            finish(&mut flow);
            flow.valign = VerticalAlign::Top;
            let title_h = estimate_height(&flow, column_width);
            tree.push(LayerKind::Text, "title", text_box(content_top, Length::px(title_h)))
                .child(Element::Text(flow));
            image_top = content_top + Length::px(title_h + spacing);
        }

        let inset = pad + layout.image_margin;
        let image = Geometry::new(
            Length::px(inset),
            image_top,
            Length::FULL - Length::px(2.0 * inset),
            Length::pct(layout.image_scale),
        )
        .with_offset(chrome::canvas_offset(input));
        chrome::illustration(&mut tree, input, &palette, image, LESSON_IMAGE_RADIUS);

        let body_top = image.bottom() + Length::px(spacing);
        let mut flow = style.flow(body);
        finish(&mut flow);
        let (top, height) = chrome::text_band(body_top, content_bottom);
        tree.push(LayerKind::Text, "text", text_box(top, height))
            .child(Element::Text(flow));
        tree
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/lesson.rs"]
mod tests;
