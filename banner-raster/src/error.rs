//! Error types for banner-raster.

use thiserror::Error;

/// Result type alias using BannerError.
pub type BannerResult<T> = Result<T, BannerError>;

/// Errors that can surface from the banner rendering pipeline.
///
/// Font resolution problems never appear here: the font provider absorbs
/// them by falling back to another font.
#[derive(Debug, Error)]
pub enum BannerError {
    /// Color string is not of the form `#RRGGBB`.
    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    /// Canvas or wrap geometry that cannot be rasterized.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A background was requested without any color stops.
    #[error("Background requires at least one color stop")]
    MissingColorStop,

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),
}

impl From<png::EncodingError> for BannerError {
    fn from(err: png::EncodingError) -> Self {
        BannerError::PngError(err.to_string())
    }
}
