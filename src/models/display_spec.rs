use tricolor_dither::{Palette, TricolorConverter};

/// Panel geometry the converter targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// 7.5" tri-color panel (black/white/red): 800x480
    pub const EPD_7IN5B_V2: Self = Self {
        width: 800,
        height: 480,
    };

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes per packed plane (one bit per pixel, last byte zero padded)
    pub fn plane_len(&self) -> usize {
        self.pixel_count().div_ceil(8)
    }

    /// Converter whose canvas matches this panel
    pub fn converter(&self, palette: Palette) -> TricolorConverter {
        TricolorConverter::new(palette).canvas(self.width as usize, self.height as usize)
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::EPD_7IN5B_V2
    }
}
