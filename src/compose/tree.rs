use std::ops::{Add, Neg, Sub};

use crate::{
    foundation::core::{Color, REFERENCE_WIDTH, Rect, Vec2},
    markup::inline::RunStyle,
    model::settings::{TemplateKind, TextAlign},
    model::slide::ImageRef,
};

/// Backend-agnostic description of one rendered slide.
///
/// The tree carries everything a renderer needs: the frame background, and a flat list of
/// layers sorted by `(z, insertion order)`. Every length inside is either a percentage of
/// the frame or a reference pixel (1/1080 of the frame width), so the same tree renders with
/// the same relative geometry at any export size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTree {
    pub slide_id: String,
    pub template: TemplateKind,
    /// Zero-based slide position.
    pub index: usize,
    pub total: usize,
    pub background: Color,
    pub layers: Vec<Layer>,
}

impl VisualTree {
    pub fn new(
        slide_id: impl Into<String>,
        template: TemplateKind,
        index: usize,
        total: usize,
        background: Color,
    ) -> Self {
        Self {
            slide_id: slide_id.into(),
            template,
            index,
            total,
            background,
            layers: Vec::new(),
        }
    }

    /// Append a layer, deriving its id from the slide id and `suffix`.
    pub fn push(&mut self, kind: LayerKind, suffix: &str, geometry: Geometry) -> &mut Layer {
        let id = format!("{}/{}", self.slide_id, suffix);
        self.layers.push(Layer {
            id,
            kind,
            z: kind.z(),
            geometry,
            style: LayerStyle::default(),
            children: Vec::new(),
        });
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    /// Stable sort by z; equal z keeps insertion order.
    pub fn sort_layers(&mut self) {
        self.layers.sort_by_key(|l| l.z);
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn layers_of(&self, kind: LayerKind) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(move |l| l.kind == kind)
    }

    /// Every distinct image reference in the tree, in sorted order.
    pub fn image_refs(&self) -> Vec<ImageRef> {
        let mut out = Vec::new();
        self.for_each_element(&mut |el| {
            if let Some(src) = el.image_source() {
                out.push(src.clone());
            }
        });
        out.sort();
        out.dedup();
        out
    }

    pub fn for_each_element(&self, f: &mut impl FnMut(&Element)) {
        for layer in &self.layers {
            for child in &layer.children {
                child.walk(f);
            }
        }
    }

    pub fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        for layer in &mut self.layers {
            for child in &mut layer.children {
                child.walk_mut(f);
            }
        }
    }
}

/// Role of a layer; determines its z-order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    BackgroundImage,
    BackgroundOverlay,
    Illustration,
    Gradient,
    Text,
    Header,
    Footer,
    Pagination,
}

impl LayerKind {
    pub const fn z(self) -> i32 {
        match self {
            LayerKind::BackgroundImage => 10,
            LayerKind::BackgroundOverlay => 20,
            LayerKind::Illustration => 30,
            LayerKind::Gradient => 35,
            LayerKind::Text => 40,
            LayerKind::Header => 45,
            LayerKind::Footer => 50,
            LayerKind::Pagination => 55,
        }
    }
}

/// A length made of a percentage of the frame extent plus reference pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Length {
    pub pct: f64,
    pub px: f64,
}

impl Length {
    pub const ZERO: Self = Self { pct: 0.0, px: 0.0 };
    pub const FULL: Self = Self {
        pct: 100.0,
        px: 0.0,
    };

    pub const fn pct(pct: f64) -> Self {
        Self { pct, px: 0.0 }
    }

    pub const fn px(px: f64) -> Self {
        Self { pct: 0.0, px }
    }

    /// Device pixels for a frame whose extent along this axis is `extent` and whose
    /// device-per-reference scale is `scale`.
    pub fn resolve(self, extent: f64, scale: f64) -> f64 {
        self.pct / 100.0 * extent + self.px * scale
    }

    /// Reference pixels, assuming the frame extent is `extent_ref` reference pixels.
    pub fn to_ref_px(self, extent_ref: f64) -> f64 {
        self.resolve(extent_ref, 1.0)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Self) -> Self::Output {
        Length {
            pct: self.pct + rhs.pct,
            px: self.px + rhs.px,
        }
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Self::Output {
        Length {
            pct: -self.pct,
            px: -self.px,
        }
    }
}

/// Box of a layer. Horizontal lengths resolve against the frame width, vertical ones
/// against the frame height; `offset` is a translation in reference px.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    pub left: Length,
    pub top: Length,
    pub width: Length,
    pub height: Length,
    pub offset: Vec2,
}

impl Geometry {
    /// The whole frame.
    pub const FULL: Self = Self {
        left: Length::ZERO,
        top: Length::ZERO,
        width: Length::FULL,
        height: Length::FULL,
        offset: Vec2::ZERO,
    };

    pub fn new(left: Length, top: Length, width: Length, height: Length) -> Self {
        Self {
            left,
            top,
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Device-pixel rectangle for a `width` x `height` frame.
    pub fn resolve(&self, width: f64, height: f64) -> Rect {
        let scale = width / REFERENCE_WIDTH;
        let x0 = self.left.resolve(width, scale) + self.offset.x * scale;
        let y0 = self.top.resolve(height, scale) + self.offset.y * scale;
        let w = self.width.resolve(width, scale).max(0.0);
        let h = self.height.resolve(height, scale).max(0.0);
        Rect::new(x0, y0, x0 + w, y0 + h)
    }

    /// Bottom edge as a vertical length, ignoring the offset.
    pub fn bottom(&self) -> Length {
        self.top + self.height
    }
}

/// Fill of a layer box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Paint {
    Solid { color: Color },
    /// Linear gradient from the top edge to the bottom edge.
    VerticalGradient { top: Color, bottom: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    pub fill: Option<Paint>,
    /// Corner radius in reference px; also clips the children.
    pub radius: f64,
    pub opacity: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            fill: None,
            radius: 0.0,
            opacity: 1.0,
        }
    }
}

/// One positioned, z-ordered box of the tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// `"{slide_id}/{suffix}"`, unique within a tree.
    pub id: String,
    pub kind: LayerKind,
    pub z: i32,
    pub geometry: Geometry,
    pub style: LayerStyle,
    pub children: Vec<Element>,
}

impl Layer {
    pub fn fill(&mut self, paint: Paint) -> &mut Self {
        self.style.fill = Some(paint);
        self
    }

    pub fn radius(&mut self, radius: f64) -> &mut Self {
        self.style.radius = radius;
        self
    }

    pub fn child(&mut self, element: Element) -> &mut Self {
        self.children.push(element);
        self
    }
}

/// Lifecycle of an image reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl LoadState {
    pub fn is_settled(self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// The image is still to be produced; drawn as a spinner.
    Generating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackAlign {
    Start,
    Center,
    End,
}

impl StackAlign {
    /// Fraction of the free space placed before the content.
    pub fn factor(self) -> f64 {
        match self {
            StackAlign::Start => 0.0,
            StackAlign::Center => 0.5,
            StackAlign::End => 1.0,
        }
    }
}

/// Content of a layer. Sizes are reference px.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Element {
    /// Cover-fit image filling the layer box.
    Image {
        source: ImageRef,
        /// Vertical crop focal point, percent.
        focal_y: f64,
        load: LoadState,
    },
    /// Stand-in for an image that does not exist yet.
    Placeholder {
        indicator: Indicator,
        surface: Color,
        ink: Color,
    },
    Text(TextFlow),
    /// Round profile picture. Without a source it is drawn as a `fallback` disc.
    Avatar {
        source: Option<ImageRef>,
        diameter: f64,
        load: LoadState,
        fallback: Color,
    },
    Label {
        text: String,
        size: f64,
        bold: bool,
        color: Color,
    },
    VerifiedBadge {
        size: f64,
        color: Color,
    },
    Stack {
        axis: Axis,
        gap: f64,
        align: StackAlign,
        items: Vec<Element>,
    },
}

impl Element {
    pub fn image_source(&self) -> Option<&ImageRef> {
        match self {
            Element::Image { source, .. } => Some(source),
            Element::Avatar {
                source: Some(source),
                ..
            } => Some(source),
            _ => None,
        }
    }

    pub fn load_state(&self) -> Option<LoadState> {
        match self {
            Element::Image { load, .. } => Some(*load),
            Element::Avatar {
                source: Some(_),
                load,
                ..
            } => Some(*load),
            _ => None,
        }
    }

    pub fn walk(&self, f: &mut impl FnMut(&Element)) {
        f(self);
        if let Element::Stack { items, .. } = self {
            for item in items {
                item.walk(f);
            }
        }
    }

    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        if let Element::Stack { items, .. } = self {
            for item in items {
                item.walk_mut(f);
            }
        }
    }
}

/// Vertical placement of a text flow inside its layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
}

/// Styled paragraphs set inside a layer box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFlow {
    pub paragraphs: Vec<TextParagraph>,
    pub align: TextAlign,
    pub valign: VerticalAlign,
    pub font_family: String,
    /// Line height multiplier.
    pub line_height: f64,
    /// Space between consecutive non-spacer paragraphs, reference px.
    pub paragraph_gap: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParagraphKind {
    Heading1,
    Heading2,
    Bullet,
    Numbered,
    Paragraph,
    Spacer,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextParagraph {
    pub kind: ParagraphKind,
    /// `•` or `7.` for list items, set in a hanging column.
    pub marker: Option<StyledRun>,
    pub runs: Vec<StyledRun>,
    pub font_size: f64,
    /// Vertical space of a spacer; zero otherwise.
    pub space: f64,
}

/// A run with its theme colours and decorations resolved.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub underline: bool,
    pub highlight: Option<Color>,
}

#[cfg(test)]
#[path = "../../tests/unit/compose/tree.rs"]
mod tests;
