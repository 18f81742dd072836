//! Palette struct with nearest-color matching.
//!
//! This module provides the [`Palette`] type: the three colors a tri-color
//! e-paper panel can show, in the order that defines their index.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// The tri-color e-paper palette.
///
/// Holds exactly three distinct colors. Their position is their index and
/// carries a role:
///
/// | Index | Role  | Default         |
/// |-------|-------|-----------------|
/// | 0     | black | `(0, 0, 0)`     |
/// | 1     | white | `(255, 255, 255)` |
/// | 2     | red   | `(255, 0, 0)`   |
///
/// The index is what ends up in the packed bit planes, so reordering the
/// palette changes the output bytes.
///
/// # Example
///
/// ```
/// use tricolor_dither::{Palette, Rgb};
///
/// let palette = Palette::default();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.red(), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; Palette::LEN],
}

impl Palette {
    /// Number of colors in every palette.
    pub const LEN: usize = 3;

    /// Index of the black entry.
    pub const BLACK_INDEX: usize = 0;

    /// Index of the white entry.
    pub const WHITE_INDEX: usize = 1;

    /// Index of the designated red entry, the one the red plane matches.
    pub const RED_INDEX: usize = 2;

    /// Black, white, red.
    pub const DEFAULT_COLORS: [Rgb; Palette::LEN] = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(255, 0, 0),
    ];

    /// Create a palette from three colors in black, white, red order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` does not hold exactly three entries ([`PaletteError::WrongLength`])
    /// - two entries are the same color ([`PaletteError::DuplicateColor`])
    ///
    /// # Example
    ///
    /// ```
    /// use tricolor_dither::{Palette, PaletteError, Rgb};
    ///
    /// let colors = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(200, 0, 0)];
    /// let palette = Palette::new(&colors).unwrap();
    /// assert_eq!(palette.red(), Rgb::new(200, 0, 0));
    ///
    /// let err = Palette::new(&colors[..2]).unwrap_err();
    /// assert!(matches!(err, PaletteError::WrongLength { expected: 3, actual: 2 }));
    /// ```
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        let colors: [Rgb; Palette::LEN] =
            colors.try_into().map_err(|_| PaletteError::WrongLength {
                expected: Palette::LEN,
                actual: colors.len(),
            })?;

        // Duplicates would make the reverse index lookup ambiguous
        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self { colors })
    }

    /// Create a palette from hex color strings.
    ///
    /// Convenience constructor that parses strings like "#FF0000" or "#F00"
    /// and then validates them like [`Palette::new`].
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use tricolor_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
    /// assert_eq!(palette, Palette::default());
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Returns the number of colors in the palette (always 3).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for symmetry with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 3`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The designated red entry.
    #[inline]
    pub fn red(&self) -> Rgb {
        self.colors[Palette::RED_INDEX]
    }

    /// Find the palette entry with the smallest L1 distance to `sample`.
    ///
    /// Ties go to the entry that comes first in palette order, so the
    /// result is deterministic.
    ///
    /// # Example
    ///
    /// ```
    /// use tricolor_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::default();
    /// // 384 to black, 381 to white
    /// assert_eq!(palette.nearest_color(Rgb::new(128, 128, 128)), Rgb::new(255, 255, 255));
    /// assert_eq!(palette.nearest_color(Rgb::new(200, 30, 10)), Rgb::new(255, 0, 0));
    /// ```
    #[inline]
    pub fn nearest_color(&self, sample: Rgb) -> Rgb {
        self.colors[self.nearest_index(sample)]
    }

    /// Index of the entry [`nearest_color`](Self::nearest_color) returns.
    #[inline]
    pub fn nearest_index(&self, sample: Rgb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        // Strict less-than keeps the first entry on ties
        for (i, &color) in self.colors.iter().enumerate() {
            let dist = sample.l1_distance(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx
    }

    /// Nearest match used for the red plane.
    ///
    /// The candidate set for this match is the red entry alone, so the
    /// result is the red entry for every sample. The distance never
    /// decides anything here; the red plane output depends on this exact
    /// behavior.
    #[inline]
    pub fn nearest_red_or_black(&self, _sample: Rgb) -> Rgb {
        self.red()
    }

    /// Reverse lookup: the index of `color` by exact channel equality.
    ///
    /// # Example
    ///
    /// ```
    /// use tricolor_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::default();
    /// assert_eq!(palette.index_of(Rgb::new(255, 255, 255)), Some(1));
    /// assert_eq!(palette.index_of(Rgb::new(254, 255, 255)), None);
    /// ```
    #[inline]
    pub fn index_of(&self, color: Rgb) -> Option<u8> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| i as u8)
    }

    /// Returns true if `color` is one of the palette entries.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.index_of(color).is_some()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: Palette::DEFAULT_COLORS,
        }
    }
}
