//! Unified error type for the tricolor-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the tricolor-dither public API.
///
/// The pipeline itself cannot fail on a well-formed raster; every variant
/// here is a boundary check on inputs.
///
/// # Example
///
/// ```
/// use tricolor_dither::{DitherError, Palette};
///
/// fn create_palette() -> Result<Palette, DitherError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Error)]
pub enum DitherError {
    /// Raster size differs from the converter's canvas
    #[error("invalid dimensions: expected {expected_width}x{expected_height}, got {width}x{height}")]
    InvalidDimensions {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    /// Pixel buffer does not match the declared dimensions
    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// Palette validation error (wrong length, duplicate, or parse error)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
}
