/// Convenience result type used across the crate.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Error taxonomy for the render/export boundary.
///
/// Parsing, layout resolution and composition are total and never produce these; errors only
/// originate where the engine touches the outside world (project loading, images, pixels).
#[derive(thiserror::Error, Debug)]
pub enum CarouselError {
    /// Invalid caller-provided data (contract violation at the boundary).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing model data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// An image reference could not be resolved or decoded.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// Rasterization or encoding failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarouselError {
    /// Build a [`CarouselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CarouselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`CarouselError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`CarouselError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for CarouselError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
