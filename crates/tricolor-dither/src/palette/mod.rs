//! Palette types and utilities
//!
//! This module provides the fixed tri-color [`Palette`] and its error types
//! for color parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
