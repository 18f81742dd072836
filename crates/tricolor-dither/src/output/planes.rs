//! Bit-plane packing.
//!
//! A quantized raster is reduced to two independent 1-bit planes, each
//! packed into bytes MSB first: pixel `j` of a group of 8 lands in bit
//! `7 - j`.
//!
//! Only the least significant bit of a palette index is stored. Index 2
//! (binary `10`) therefore packs as `0`, the same as black. The panel
//! firmware expects exactly this layout, so the truncation is kept.

use crate::color::Rgb;
use crate::palette::Palette;
use crate::raster::Raster;

/// One of the two output planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Black/white plane, driven by the full-palette nearest match.
    BlackWhite,
    /// Red plane, driven by [`Palette::nearest_red_or_black`].
    Red,
}

impl Plane {
    /// Both planes in output order.
    pub const ALL: [Plane; 2] = [Plane::BlackWhite, Plane::Red];

    /// Palette match used to decide this plane's bit for `pixel`.
    #[inline]
    pub fn match_color(self, palette: &Palette, pixel: Rgb) -> Rgb {
        match self {
            Plane::BlackWhite => palette.nearest_color(pixel),
            Plane::Red => palette.nearest_red_or_black(pixel),
        }
    }

    /// Suffix appended to the array name in generated source code.
    pub fn suffix(self) -> &'static str {
        match self {
            Plane::BlackWhite => "_b",
            Plane::Red => "_ry",
        }
    }
}

/// Number of bytes a plane of `pixel_count` pixels packs into.
#[inline]
pub fn packed_len(pixel_count: usize) -> usize {
    pixel_count.div_ceil(8)
}

/// Pack one plane of `raster` into bytes.
///
/// Pixels are read in row-major order. A color the reverse lookup cannot
/// find counts as index 0. When the pixel count is not a multiple of 8
/// the unused low bits of the last byte stay 0.
///
/// # Example
///
/// ```
/// use tricolor_dither::{pack_plane, Palette, Plane, Raster, Rgb};
///
/// let palette = Palette::default();
/// let white = Rgb::new(255, 255, 255);
/// let black = Rgb::new(0, 0, 0);
/// let raster = Raster::new(vec![white, black, white], 3, 1).unwrap();
///
/// assert_eq!(pack_plane(&raster, &palette, Plane::BlackWhite), vec![0b1010_0000]);
/// ```
pub fn pack_plane(raster: &Raster, palette: &Palette, plane: Plane) -> Vec<u8> {
    let mut packed = Vec::with_capacity(packed_len(raster.len()));

    for chunk in raster.pixels().chunks(8) {
        let mut byte = 0u8;
        for (j, &pixel) in chunk.iter().enumerate() {
            let matched = plane.match_color(palette, pixel);
            let index = palette.index_of(matched).unwrap_or(0);
            byte |= (index & 1) << (7 - j);
        }
        packed.push(byte);
    }

    packed
}

/// The two packed planes of one converted image.
///
/// # Example
///
/// ```
/// use tricolor_dither::{PackedPlanes, Palette, Plane, Raster, Rgb};
///
/// let raster = Raster::filled(800, 480, Rgb::new(255, 255, 255));
/// let planes = PackedPlanes::pack(&raster, &Palette::default());
///
/// assert_eq!(planes.plane(Plane::BlackWhite).len(), 48_000);
/// assert!(planes.black_white().iter().all(|&b| b == 0xFF));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPlanes {
    black_white: Vec<u8>,
    red: Vec<u8>,
    width: usize,
    height: usize,
}

impl PackedPlanes {
    /// Pack both planes of an already quantized raster.
    pub fn pack(raster: &Raster, palette: &Palette) -> Self {
        Self {
            black_white: pack_plane(raster, palette, Plane::BlackWhite),
            red: pack_plane(raster, palette, Plane::Red),
            width: raster.width(),
            height: raster.height(),
        }
    }

    #[inline]
    pub fn black_white(&self) -> &[u8] {
        &self.black_white
    }

    #[inline]
    pub fn red(&self) -> &[u8] {
        &self.red
    }

    #[inline]
    pub fn plane(&self, plane: Plane) -> &[u8] {
        match plane {
            Plane::BlackWhite => &self.black_white,
            Plane::Red => &self.red,
        }
    }

    /// Width of the source raster in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the source raster in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per plane.
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.black_white.len()
    }
}
