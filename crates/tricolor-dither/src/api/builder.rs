//! TricolorConverter builder -- the primary ergonomic entry point for the crate.
//!
//! [`TricolorConverter`] wraps the pipeline (canvas check, Floyd-Steinberg
//! quantization, plane packing) behind a small fluent builder.

use crate::dither::FloydSteinberg;
use crate::output::PackedPlanes;
use crate::palette::Palette;
use crate::raster::Raster;

use super::DitherError;

/// High-level converter for tri-color e-paper panels.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter is
///   reusable across many images
/// - The canvas defaults to the 800x480 panel; a raster of any other size
///   is rejected rather than resampled
///
/// # Example
///
/// ```
/// use tricolor_dither::{Palette, Raster, Rgb, TricolorConverter};
///
/// let converter = TricolorConverter::new(Palette::default()).canvas(2, 1);
///
/// let raster = Raster::filled(2, 1, Rgb::new(255, 0, 0));
/// let planes = converter.convert(raster).unwrap();
///
/// assert_eq!(planes.black_white(), &[0x00]);
/// assert_eq!(planes.red(), &[0x00]);
/// ```
#[derive(Debug, Clone)]
pub struct TricolorConverter {
    palette: Palette,
    width: usize,
    height: usize,
}

impl TricolorConverter {
    /// Panel width in pixels.
    pub const DEFAULT_WIDTH: usize = 800;

    /// Panel height in pixels.
    pub const DEFAULT_HEIGHT: usize = 480;

    /// Create a converter for the default 800x480 canvas.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    /// Set the canvas size rasters must match.
    #[inline]
    pub fn canvas(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// `(width, height)` of the canvas.
    #[inline]
    pub fn canvas_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Bytes in each packed plane for this canvas.
    #[inline]
    pub fn plane_len(&self) -> usize {
        (self.width * self.height).div_ceil(8)
    }

    /// Reject rasters that are not exactly the canvas size.
    pub fn check_dimensions(&self, raster: &Raster) -> Result<(), DitherError> {
        let (width, height) = raster.dimensions();
        if (width, height) != (self.width, self.height) {
            return Err(DitherError::InvalidDimensions {
                expected_width: self.width,
                expected_height: self.height,
                width,
                height,
            });
        }
        Ok(())
    }

    /// Quantize a raster to the palette with Floyd-Steinberg dithering.
    ///
    /// The returned raster holds only palette colors; it is what the panel
    /// will show, which makes it suitable for previews.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidDimensions`] if the raster is not the canvas size.
    pub fn quantize(&self, mut raster: Raster) -> Result<Raster, DitherError> {
        self.check_dimensions(&raster)?;
        FloydSteinberg.dither(&mut raster, &self.palette);
        Ok(raster)
    }

    /// Pack an already quantized raster into the two output planes.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidDimensions`] if the raster is not the canvas size.
    pub fn pack(&self, quantized: &Raster) -> Result<PackedPlanes, DitherError> {
        self.check_dimensions(quantized)?;
        Ok(PackedPlanes::pack(quantized, &self.palette))
    }

    /// Quantize and pack in one step.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidDimensions`] if the raster is not the canvas size.
    pub fn convert(&self, raster: Raster) -> Result<PackedPlanes, DitherError> {
        let quantized = self.quantize(raster)?;
        Ok(PackedPlanes::pack(&quantized, &self.palette))
    }
}
