//! tricolor-dither: image quantization for black/white/red e-paper panels
//!
//! This library turns an RGB raster into the two 1-bit planes a tri-color
//! e-paper controller expects: one black/white plane and one red plane,
//! each packed 8 pixels per byte.
//!
//! # Quick Start
//!
//! The [`TricolorConverter`] builder is the primary entry point:
//!
//! ```
//! use tricolor_dither::{Palette, Raster, Rgb, TricolorConverter};
//!
//! let converter = TricolorConverter::new(Palette::default());
//! let raster = Raster::filled(800, 480, Rgb::new(128, 128, 128));
//!
//! let planes = converter.convert(raster).unwrap();
//! assert_eq!(planes.black_white().len(), 48_000);
//! assert_eq!(planes.red().len(), 48_000);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Raster (800x480 RGB, from an external decoder/resizer)
//!     |
//!     v
//! FloydSteinberg          (in place, row-major, L1 nearest color,
//!     |                    7/16 3/16 5/16 1/16, truncate + clamp)
//!     v
//! Raster (palette colors only)
//!     |
//!     +---> Plane::BlackWhite   nearest_color -> index -> LSB
//!     +---> Plane::Red          nearest_red_or_black -> index -> LSB
//!     |
//!     v
//! PackedPlanes (2 x ceil(w*h/8) bytes, MSB = first pixel)
//! ```
//!
//! # Palette Order
//!
//! The palette is always black, white, red (indices 0, 1, 2). Only the
//! least significant bit of an index is packed, so on the black/white
//! plane white is `1` while black and red are both `0`. The red plane
//! always matches the red entry, whose index packs as `0`.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{DitherError, TricolorConverter};
pub use color::Rgb;
pub use dither::{FloydSteinberg, Kernel, FLOYD_STEINBERG};
pub use output::{pack_plane, PackedPlanes, Plane};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use raster::Raster;
