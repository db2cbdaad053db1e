use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use base64::Engine;

use crate::{
    foundation::error::{CarouselError, CarouselResult},
    foundation::math::premultiply_rgba8_in_place,
    model::slide::ImageRef,
};

/// Decoded image as premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Turns image references into pixels.
///
/// Loaders are shared across worker threads during settling and export.
pub trait ImageLoader: Send + Sync {
    fn load(&self, source: &ImageRef) -> CarouselResult<PreparedImage>;
}

/// Loads project-relative files and `data:` URIs.
#[derive(Clone, Debug)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_bytes(&self, source: &str) -> CarouselResult<Vec<u8>> {
        if source.starts_with("data:") {
            return decode_data_uri(source);
        }
        if let Some((scheme, _)) = source.split_once("://") {
            return Err(CarouselError::image_load(format!(
                "unsupported image scheme '{scheme}' in '{source}'"
            )));
        }
        let norm = normalize_rel_path(source)?;
        let path = self.root.join(&norm);
        std::fs::read(&path)
            .with_context(|| format!("read image bytes from '{}'", path.display()))
            .map_err(|e| CarouselError::image_load(format!("{e:#}")))
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, source: &ImageRef) -> CarouselResult<PreparedImage> {
        let bytes = self.read_bytes(source.as_str())?;
        decode_image(&bytes)
            .map_err(|e| CarouselError::image_load(format!("'{}': {e}", short(source.as_str()))))
    }
}

// Data URIs can be megabytes long; keep error messages readable.
fn short(s: &str) -> String {
    const MAX: usize = 64;
    match s.char_indices().nth(MAX) {
        Some((i, _)) => format!("{}...", &s[..i]),
        None => s.to_string(),
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> CarouselResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Payload bytes of a `data:[<mediatype>][;base64],<data>` URI.
pub fn decode_data_uri(uri: &str) -> CarouselResult<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CarouselError::image_load("not a data URI"))?;
    let (meta, data) = rest
        .split_once(',')
        .ok_or_else(|| CarouselError::image_load("invalid data URI: missing comma"))?;

    if meta.split(';').any(|p| p.eq_ignore_ascii_case("base64")) {
        let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| CarouselError::image_load(format!("invalid base64 in data URI: {e}")))
    } else {
        percent_decode(data)
    }
}

fn percent_decode(s: &str) -> CarouselResult<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| CarouselError::image_load("invalid percent escape in data URI"))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

/// Normalize a project-relative path: forward slashes, no `.` segments, no escaping `..`.
pub fn normalize_rel_path(source: &str) -> CarouselResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CarouselError::image_load("image paths must be relative"));
    }
    if s.is_empty() {
        return Err(CarouselError::image_load("image path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CarouselError::image_load("image paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CarouselError::image_load("image path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/images.rs"]
mod tests;
