//! Owned RGB raster.
//!
//! [`Raster`] is the mutable pixel grid the dithering engine works on.
//! Pixels are stored row-major; `(x, y)` addresses column `x` of row `y`.

use crate::api::DitherError;
use crate::color::Rgb;

/// A fixed-size, row-major grid of [`Rgb`] pixels.
///
/// The dimensions are set at construction and never change. The dithering
/// engine takes the raster by `&mut` for the duration of one conversion and
/// rewrites every pixel in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Wrap row-major pixels.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidBufferLength`] if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Self, DitherError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(DitherError::InvalidBufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a raster from packed `[R, G, B, R, G, B, ...]` bytes, as produced
    /// by image decoders.
    ///
    /// # Errors
    ///
    /// [`DitherError::InvalidBufferLength`] if `bytes.len() != width * height * 3`.
    ///
    /// # Example
    ///
    /// ```
    /// use tricolor_dither::{Raster, Rgb};
    ///
    /// let raster = Raster::from_rgb_bytes(&[255, 0, 0, 0, 0, 0], 2, 1).unwrap();
    /// assert_eq!(raster.get(0, 0), Rgb::new(255, 0, 0));
    /// assert_eq!(raster.get(1, 0), Rgb::new(0, 0, 0));
    /// ```
    pub fn from_rgb_bytes(bytes: &[u8], width: usize, height: usize) -> Result<Self, DitherError> {
        let expected = width * height * 3;
        if bytes.len() != expected {
            return Err(DitherError::InvalidBufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// A raster with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `(x, y)` lies inside the raster. Takes signed coordinates so
    /// callers can probe neighbors left of column 0.
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[y * self.width + x] = color;
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Flatten back to `[R, G, B, ...]` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            rgb.extend_from_slice(&px.to_bytes());
        }
        rgb
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}
