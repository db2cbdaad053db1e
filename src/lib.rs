//! Deterministic slide layout and rendering for image carousels.
//!
//! A slide's markdown-like content, its per-slide overrides and the project's global settings
//! are turned into a [`VisualTree`] by one of three templates. The tree is toolkit-independent:
//! [`settle`] loads its images, and [`preview`] / [`capture_png`] rasterize the settled frame
//! with the same code path.
//!
//! ```no_run
//! use carousel::{CpuBackend, FrameSize, FsImageLoader, Project, RenderSettings};
//!
//! # fn main() -> carousel::CarouselResult<()> {
//! let project = Project::from_json_file("project.json".as_ref())?;
//! let tree = carousel::compose_slide(&project, 0)?;
//! let frame = carousel::settle(tree, &FsImageLoader::new("."));
//! let mut backend = CpuBackend::new(RenderSettings::default());
//! let png = carousel::capture_png(&frame, &mut backend, FrameSize::PORTRAIT)?;
//! # let _ = png;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

pub mod compose;
pub(crate) mod foundation;
pub(crate) mod layout;
pub(crate) mod markup;
pub(crate) mod model;
pub mod render;

pub use compose::template::{ComposeInput, Template, compose, compose_slide, template_for};
pub use compose::tree::{
    Axis, Element, Geometry, Indicator, Layer, LayerKind, LayerStyle, Length, LoadState, Paint,
    ParagraphKind, StackAlign, StyledRun, TextFlow, TextParagraph, VerticalAlign, VisualTree,
};
pub use foundation::core::{Color, FrameSize, Point, REFERENCE_WIDTH, Rect, Vec2};
pub use foundation::error::{CarouselError, CarouselResult};
pub use layout::resolve::{ResolvedLayout, cascade, resolve_layout};
pub use layout::typography::{TypeScale, font_family};
pub use markup::block::{Block, parse_blocks};
pub use markup::inline::{InlineRun, RunStyle, parse_inline, runs_text};
pub use markup::split::{TitleBody, split_title_body};
pub use model::project::Project;
pub use model::settings::{
    ContentLayout, FontStyle, GlobalSettings, LayoutSettings, Profile, TemplateKind, TextAlign,
    Theme,
};
pub use model::slide::{BackgroundImage, ImageRef, Slide, SlideRole};
pub use render::backend::{
    FontSet, FrameRGBA, ImageErrorPolicy, RenderBackend, RenderMode, RenderSettings,
};
pub use render::cpu::CpuBackend;
pub use render::fingerprint::{TreeFingerprint, fingerprint_tree};
pub use render::images::{FsImageLoader, ImageLoader, PreparedImage, decode_data_uri, decode_image};
pub use render::pipeline::{
    CancelToken, ExportOpts, ExportReport, ExportThreading, SlideExport, SlideOutcome, capture,
    capture_png, export_carousel, preview,
};
pub use render::png::encode_png;
pub use render::settle::{SettledFrame, settle};
