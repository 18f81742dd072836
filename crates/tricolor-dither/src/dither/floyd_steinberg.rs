//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbors, which keeps the average tone of flat regions close to the
//! input even with a three-color palette.

use crate::palette::Palette;
use crate::raster::Raster;

use super::{dither_with_kernel, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// Pixels are visited row by row, left to right. Each one is replaced by
/// its nearest palette color (L1 distance) and the per-channel error
/// `old - new` is spread over 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// A neighbor's channels are truncated toward zero and clamped to
/// `0..=255` right after its share is added. Neighbors outside the raster
/// are skipped.
///
/// # Example
///
/// ```
/// use tricolor_dither::{FloydSteinberg, Palette, Raster, Rgb};
///
/// let palette = Palette::default();
/// let mut raster = Raster::filled(2, 1, Rgb::new(255, 0, 0));
/// FloydSteinberg.dither(&mut raster, &palette);
/// assert_eq!(raster.pixels(), &[Rgb::new(255, 0, 0); 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl FloydSteinberg {
    /// Quantize `raster` to `palette` in place.
    ///
    /// On return every pixel is exactly one of the palette colors and the
    /// raster dimensions are unchanged.
    pub fn dither(&self, raster: &mut Raster, palette: &Palette) {
        dither_with_kernel(raster, palette, &FLOYD_STEINBERG);
    }
}
