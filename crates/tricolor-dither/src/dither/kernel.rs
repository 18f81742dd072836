//! Error diffusion kernel definition.
//!
//! A kernel specifies how quantization error is distributed to neighboring
//! pixels that have not been visited yet.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` and a weight; a neighbor receives
/// `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (always >= 0, 0 only with dx > 0)
    /// - `weight`: numerator of the fraction of error to diffuse
    ///
    /// Entries are applied in order.
    pub entries: &'static [(i32, i32, i32)],

    /// Denominator shared by all weights.
    pub divisor: i32,
}

impl Kernel {
    /// Sum of all weights. Equal to `divisor` when 100% of error propagates.
    pub fn total_weight(&self) -> i32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
