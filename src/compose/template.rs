use crate::{
    compose::palette::Palette,
    compose::tree::VisualTree,
    compose::{cinematic::CinematicImage, feed_text::FeedText, lesson::Lesson},
    foundation::error::{CarouselError, CarouselResult},
    layout::resolve::{ResolvedLayout, resolve_layout},
    layout::typography::TypeScale,
    markup::block::{Block, parse_blocks},
    model::project::Project,
    model::settings::{Profile, TemplateKind},
    model::slide::Slide,
};

/// Everything a template needs to compose one slide.
#[derive(Clone, Copy, Debug)]
pub struct ComposeInput<'a> {
    pub kind: TemplateKind,
    pub layout: &'a ResolvedLayout,
    pub blocks: &'a [Block],
    pub slide: &'a Slide,
    pub profile: &'a Profile,
    pub index: usize,
    pub total: usize,
}

impl ComposeInput<'_> {
    pub fn palette(&self) -> Palette {
        Palette::for_layout(self.kind, self.layout, self.slide.background_image.is_some())
    }

    pub fn sizes(&self) -> TypeScale {
        TypeScale::base(self.kind, self.slide.role).scaled(self.layout.font_scale)
    }

    /// Whether the slide gets an illustration region (image or placeholder).
    pub fn has_illustration(&self) -> bool {
        self.layout.show_image
    }

    /// One-based `i/n` page label.
    pub fn page(&self) -> (usize, usize) {
        (self.index + 1, self.total.max(self.index + 1))
    }

    pub fn new_tree(&self, palette: &Palette) -> VisualTree {
        VisualTree::new(
            self.slide.id.clone(),
            self.kind,
            self.index,
            self.total,
            palette.background,
        )
    }
}

/// A composition strategy. Implementations must be pure: equal inputs give equal trees.
pub trait Template: Send + Sync {
    fn compose(&self, input: &ComposeInput<'_>) -> VisualTree;
}

pub fn template_for(kind: TemplateKind) -> &'static dyn Template {
    match kind {
        TemplateKind::FeedText => &FeedText,
        TemplateKind::CinematicImage => &CinematicImage,
        TemplateKind::Lesson => &Lesson,
    }
}

/// Compose one slide into a [`VisualTree`] with layers sorted by z-order.
#[tracing::instrument(skip_all, fields(template = kind.as_str(), slide = %slide.id))]
pub fn compose(
    kind: TemplateKind,
    layout: &ResolvedLayout,
    blocks: &[Block],
    slide: &Slide,
    profile: &Profile,
    index: usize,
    total: usize,
) -> VisualTree {
    let input = ComposeInput {
        kind,
        layout,
        blocks,
        slide,
        profile,
        index,
        total,
    };
    let mut tree = template_for(kind).compose(&input);
    tree.sort_layers();
    tree
}

/// Resolve, parse and compose slide `index` of a project.
pub fn compose_slide(project: &Project, index: usize) -> CarouselResult<VisualTree> {
    let slide = project.slides.get(index).ok_or_else(|| {
        CarouselError::validation(format!(
            "slide index {index} out of range (project has {} slides)",
            project.slides.len()
        ))
    })?;
    let layout = resolve_layout(slide, &project.settings);
    let blocks = parse_blocks(&slide.content);
    Ok(compose(
        project.settings.template,
        &layout,
        &blocks,
        slide,
        &project.profile,
        index,
        project.slides.len(),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/template.rs"]
mod tests;
