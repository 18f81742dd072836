//! Error diffusion dithering.
//!
//! Quantizes a [`Raster`] to the palette in place. Each pixel is replaced by
//! its nearest palette color and the difference is pushed onto neighbors
//! that have not been visited yet, so the average tone of a region survives
//! quantization.
//!
//! # Example
//!
//! ```
//! use tricolor_dither::{FloydSteinberg, Palette, Raster, Rgb};
//!
//! let palette = Palette::default();
//! let mut raster = Raster::filled(4, 4, Rgb::new(128, 128, 128));
//! FloydSteinberg.dither(&mut raster, &palette);
//!
//! assert!(raster.pixels().iter().all(|&px| palette.contains(px)));
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::color::Rgb;
use crate::palette::Palette;
use crate::raster::Raster;

/// Add a weighted share of `error` to one channel value.
///
/// The share is added in 1/divisor units and the sum truncated toward zero
/// before clamping, which equals truncating `value + error * weight / divisor`
/// computed exactly.
#[inline]
fn diffuse_channel(value: u8, error: i32, weight: i32, divisor: i32) -> u8 {
    let scaled = (value as i32 * divisor + error * weight) / divisor;
    scaled.clamp(0, 255) as u8
}

/// Apply a weighted share of `error` to the pixel at `(x, y)`.
///
/// Targets outside the raster are skipped; nothing is wrapped or moved
/// back into bounds.
#[inline]
pub(crate) fn diffuse_error(
    raster: &mut Raster,
    x: i64,
    y: i64,
    error: [i32; 3],
    weight: i32,
    divisor: i32,
) {
    if !raster.in_bounds(x, y) {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    let px = raster.get(x, y);
    raster.set(
        x,
        y,
        Rgb::new(
            diffuse_channel(px.r, error[0], weight, divisor),
            diffuse_channel(px.g, error[1], weight, divisor),
            diffuse_channel(px.b, error[2], weight, divisor),
        ),
    );
}

/// Core error diffusion loop parameterized by kernel.
///
/// Single pass, top-to-bottom, left-to-right. Every neighbor update is
/// written back (and clamped) immediately, so a pixel that is reached by
/// several earlier pixels sees each contribution clamped in turn.
pub(crate) fn dither_with_kernel(raster: &mut Raster, palette: &Palette, kernel: &Kernel) {
    let (width, height) = raster.dimensions();

    for y in 0..height {
        for x in 0..width {
            let old = raster.get(x, y);
            let new = palette.nearest_color(old);
            raster.set(x, y, new);

            let error = old.signed_diff(new);
            if error == [0, 0, 0] {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                diffuse_error(
                    raster,
                    x as i64 + dx as i64,
                    y as i64 + dy as i64,
                    error,
                    weight,
                    kernel.divisor,
                );
            }
        }
    }
}
