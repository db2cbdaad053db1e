use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::{
    foundation::core::FrameSize,
    foundation::error::{CarouselError, CarouselResult},
    render::settle::SettledFrame,
};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// What happens when a referenced image failed to load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageErrorPolicy {
    /// Draw the failed image as a placeholder and carry on.
    #[default]
    Placeholder,
    /// Fail the capture with [`CarouselError::ImageLoad`].
    Abort,
}

/// Where a frame is going. Only the spinner phase differs between the two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderMode {
    /// On-screen preview; `spinner_phase` in turns (`0.0..1.0`) animates placeholders.
    Preview { spinner_phase: f64 },
    /// Still capture for export.
    Capture,
}

impl RenderMode {
    pub fn spinner_phase(self) -> f64 {
        match self {
            RenderMode::Preview { spinner_phase } if spinner_phase.is_finite() => {
                spinner_phase.rem_euclid(1.0)
            }
            _ => 0.0,
        }
    }
}

/// Font files available to the text engine.
#[derive(Clone, Debug, Default)]
pub struct FontSet {
    faces: Vec<Arc<Vec<u8>>>,
}

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bytes: Vec<u8>) {
        self.faces.push(Arc::new(bytes));
    }

    pub fn faces(&self) -> &[Arc<Vec<u8>>] {
        &self.faces
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Load every `.ttf`, `.otf` and `.ttc` file directly inside `dir`, in file-name order.
    pub fn from_dir(dir: &Path) -> CarouselResult<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read font directory '{}'", dir.display()))?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.context("read font directory entry")?.path();
            let is_font = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"));
            if is_font {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = Self::new();
        for path in paths {
            let bytes =
                std::fs::read(&path).with_context(|| format!("read font '{}'", path.display()))?;
            set.add(bytes);
        }
        if set.is_empty() {
            return Err(CarouselError::validation(format!(
                "no font files found in '{}'",
                dir.display()
            )));
        }
        Ok(set)
    }
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub fonts: FontSet,
    pub image_errors: ImageErrorPolicy,
}

/// A renderer that turns a [`SettledFrame`] into pixels.
///
/// Geometry and colour depend only on the frame and the size; `mode` only selects the
/// placeholder spinner phase.
pub trait RenderBackend {
    fn render(
        &mut self,
        frame: &SettledFrame,
        size: FrameSize,
        mode: RenderMode,
    ) -> CarouselResult<FrameRGBA>;

    /// Settings required to construct equivalent worker backends.
    fn render_settings(&self) -> &RenderSettings;
}
