use anyhow::Context;
use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::{
    foundation::error::{CarouselError, CarouselResult},
    foundation::math::unpremultiply_rgba8_in_place,
    render::backend::FrameRGBA,
};

/// Encode a frame as a straight-alpha RGBA8 PNG.
///
/// Encoder settings are fixed, so equal frames always produce equal bytes.
pub fn encode_png(frame: &FrameRGBA) -> CarouselResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(CarouselError::render(format!(
            "frame data is {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }

    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::Adaptive)
        .write_image(
            &straight,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}
