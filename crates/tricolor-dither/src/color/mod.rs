//! Color types
//!
//! The pipeline works on plain 8-bit RGB triples end to end: the decoder
//! produces them, the palette is defined with them, and error diffusion
//! adds signed integer error to them.
//!
//! # Example
//!
//! ```
//! use tricolor_dither::Rgb;
//!
//! let pixel = Rgb::new(128, 64, 32);
//! let black = Rgb::new(0, 0, 0);
//! assert_eq!(pixel.l1_distance(black), 224);
//! ```

mod rgb;

pub use rgb::Rgb;
