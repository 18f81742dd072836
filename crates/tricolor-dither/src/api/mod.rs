//! Public API for the tricolor-dither crate.
//!
//! This module provides the high-level API: [`TricolorConverter`] builder and
//! [`DitherError`] unified error type.

mod builder;
mod error;

pub use builder::TricolorConverter;
pub use error::DitherError;
