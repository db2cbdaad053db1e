use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::{
    compose::template::compose_slide,
    compose::tree::VisualTree,
    foundation::core::FrameSize,
    foundation::error::{CarouselError, CarouselResult},
    model::project::Project,
    render::backend::{FrameRGBA, ImageErrorPolicy, RenderBackend, RenderMode, RenderSettings},
    render::cpu::CpuBackend,
    render::fingerprint::{TreeFingerprint, fingerprint_tree},
    render::images::ImageLoader,
    render::png::encode_png,
    render::settle::{SettledFrame, settle},
};

/// Render a settled frame for on-screen preview.
///
/// `spinner_phase` (turns) animates placeholders; everything else matches [`capture`].
pub fn preview(
    frame: &SettledFrame,
    backend: &mut dyn RenderBackend,
    size: FrameSize,
    spinner_phase: f64,
) -> CarouselResult<FrameRGBA> {
    backend.render(frame, size, RenderMode::Preview { spinner_phase })
}

/// Render a settled frame for export, honouring the backend's image error policy.
///
/// Returns **premultiplied** RGBA8 pixels.
#[tracing::instrument(skip_all, fields(slide = %frame.tree().slide_id, w = size.width, h = size.height))]
pub fn capture(
    frame: &SettledFrame,
    backend: &mut dyn RenderBackend,
    size: FrameSize,
) -> CarouselResult<FrameRGBA> {
    if backend.render_settings().image_errors == ImageErrorPolicy::Abort
        && let Some((source, reason)) = frame.failures().iter().next()
    {
        return Err(CarouselError::image_load(format!(
            "slide '{}' references '{}' which failed to load: {reason}",
            frame.tree().slide_id,
            source.as_str()
        )));
    }
    backend.render(frame, size, RenderMode::Capture)
}

/// [`capture`] followed by deterministic PNG encoding.
pub fn capture_png(
    frame: &SettledFrame,
    backend: &mut dyn RenderBackend,
    size: FrameSize,
) -> CarouselResult<Vec<u8>> {
    let rgba = capture(frame, backend, size)?;
    encode_png(&rgba)
}

/// Shared cancellation flag for [`export_carousel`].
///
/// Clones observe the same flag. Cancellation is checked before each slide starts.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExportThreading {
    /// Worker count; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Capture slides with identical tree fingerprints once and reuse the PNG.
    pub elide_identical: bool,
}

/// Options for [`export_carousel`].
#[derive(Clone, Debug)]
pub struct ExportOpts {
    pub size: FrameSize,
    pub threading: ExportThreading,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            size: FrameSize::PORTRAIT,
            threading: ExportThreading::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlideOutcome {
    Captured { png: Vec<u8> },
    /// Not started before cancellation.
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideExport {
    pub slide_id: String,
    pub outcome: SlideOutcome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// One entry per slide, in slide order.
    pub slides: Vec<SlideExport>,
    pub slides_rendered: u64,
    pub slides_elided: u64,
    pub slides_skipped: u64,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.slides_skipped == 0
    }
}

/// Compose, settle and capture every slide of `project` as PNG.
///
/// Work runs on a dedicated rayon pool with one [`CpuBackend`] per worker. Once `cancel`
/// fires, slides that have not started are reported as [`SlideOutcome::Skipped`];
/// captures already finished are kept.
#[tracing::instrument(skip_all, fields(slides = project.slides.len(), w = opts.size.width, h = opts.size.height))]
pub fn export_carousel(
    project: &Project,
    loader: &dyn ImageLoader,
    settings: &RenderSettings,
    opts: &ExportOpts,
    cancel: &CancelToken,
) -> CarouselResult<ExportReport> {
    project.validate()?;
    opts.size.validate()?;
    let pool = build_thread_pool(opts.threading.threads)?;

    let trees = (0..project.slides.len())
        .map(|idx| compose_slide(project, idx))
        .collect::<CarouselResult<Vec<_>>>()?;
    let (unique_indices, slide_to_unique) = plan_unique(&trees, opts.threading.elide_identical);

    let captured = pool.install(|| {
        unique_indices
            .par_iter()
            .map_init(
                || CpuBackend::new(settings.clone()),
                |worker_backend, &idx| -> CarouselResult<Option<Vec<u8>>> {
                    if cancel.is_cancelled() {
                        return Ok(None);
                    }
                    let frame = settle(trees[idx].clone(), loader);
                    capture_png(&frame, worker_backend, opts.size).map(Some)
                },
            )
            .collect::<Vec<_>>()
    });
    let mut unique_pngs = Vec::<Option<Vec<u8>>>::with_capacity(captured.len());
    for item in captured {
        unique_pngs.push(item?);
    }

    let mut report = ExportReport::default();
    for (idx, slide) in project.slides.iter().enumerate() {
        let u = slide_to_unique[idx];
        let outcome = match &unique_pngs[u] {
            Some(png) => {
                if unique_indices[u] == idx {
                    report.slides_rendered += 1;
                } else {
                    report.slides_elided += 1;
                }
                SlideOutcome::Captured { png: png.clone() }
            }
            None => {
                report.slides_skipped += 1;
                SlideOutcome::Skipped
            }
        };
        report.slides.push(SlideExport {
            slide_id: slide.id.clone(),
            outcome,
        });
    }

    if !report.is_complete() {
        tracing::warn!(
            skipped = report.slides_skipped,
            rendered = report.slides_rendered,
            "export cancelled"
        );
    }
    Ok(report)
}

/// Map each slide to the unique capture that produces its pixels.
///
/// Trees are fingerprinted before settling: equal trees reference the same images, so they
/// settle to the same frame.
fn plan_unique(trees: &[VisualTree], elide: bool) -> (Vec<usize>, Vec<usize>) {
    let mut unique_indices = Vec::<usize>::with_capacity(trees.len());
    let mut slide_to_unique = Vec::<usize>::with_capacity(trees.len());
    if elide {
        let mut first = HashMap::<TreeFingerprint, usize>::new();
        for (idx, tree) in trees.iter().enumerate() {
            let fp = fingerprint_tree(tree);
            if let Some(existing) = first.get(&fp).copied() {
                slide_to_unique.push(existing);
            } else {
                let slot = unique_indices.len();
                unique_indices.push(idx);
                first.insert(fp, slot);
                slide_to_unique.push(slot);
            }
        }
    } else {
        for idx in 0..trees.len() {
            slide_to_unique.push(idx);
            unique_indices.push(idx);
        }
    }
    (unique_indices, slide_to_unique)
}

fn build_thread_pool(threads: Option<usize>) -> CarouselResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CarouselError::validation(
            "export threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CarouselError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
