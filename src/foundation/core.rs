use crate::foundation::error::{CarouselError, CarouselResult};

pub use kurbo::{Point, Rect, Vec2};

/// Width of the reference frame every pixel length in a visual tree is expressed against.
///
/// A `px` value of 64 means "64/1080 of the frame width", so the same tree produces the same
/// relative geometry at any export resolution.
pub const REFERENCE_WIDTH: f64 = 1080.0;

/// Straight-alpha RGBA8 colour, serialized as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Color {
    /// Fully opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque colour from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with alpha replaced by `pct` percent (clamped to `[0, 100]`).
    pub fn with_alpha_pct(self, pct: f64) -> Self {
        let a = (pct.clamp(0.0, 100.0) / 100.0 * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Same colour with its alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn scale_alpha(self, factor: f64) -> Self {
        let a = (f64::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Premultiplied channels, the form the rasterizer works in.
    pub fn to_premul(self) -> [u8; 4] {
        let premul = |c: u8| -> u8 { ((u16::from(c) * u16::from(self.a) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> CarouselResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let digit = |i: usize| -> CarouselResult<u8> {
            let c = hex.as_bytes()[i] as char;
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| CarouselError::validation(format!("invalid hex colour '{s}'")))
        };
        let byte = |i: usize| -> CarouselResult<u8> { Ok(digit(i)? * 16 + digit(i + 1)?) };

        if !hex.is_ascii() {
            return Err(CarouselError::validation(format!(
                "invalid hex colour '{s}'"
            )));
        }
        match hex.len() {
            3 => Ok(Self::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(CarouselError::validation(format!(
                "hex colour '{s}' must have 3, 6 or 8 digits"
            ))),
        }
    }

    /// Lowercase hex form; alpha is omitted when opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Explicit output dimensions of a rendered frame, at a fixed pixel density of 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Largest accepted edge, in pixels.
    pub const MAX_EDGE: u32 = 8192;

    /// Instagram portrait post (4:5).
    pub const PORTRAIT: Self = Self {
        width: 1080,
        height: 1350,
    };

    /// Validated constructor.
    pub fn new(width: u32, height: u32) -> CarouselResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Reject zero-sized or oversized frames.
    pub fn validate(self) -> CarouselResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CarouselError::validation("frame size must be non-zero"));
        }
        if self.width > Self::MAX_EDGE || self.height > Self::MAX_EDGE {
            return Err(CarouselError::validation(format!(
                "frame size {}x{} exceeds {} px per side",
                self.width,
                self.height,
                Self::MAX_EDGE
            )));
        }
        Ok(())
    }

    /// Device pixels per reference pixel.
    pub fn px_scale(self) -> f64 {
        f64::from(self.width) / REFERENCE_WIDTH
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self::PORTRAIT
    }
}
