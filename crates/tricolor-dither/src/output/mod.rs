//! Output types for the conversion pipeline.
//!
//! This module provides [`PackedPlanes`], the canonical output of a
//! conversion: two 1-bit planes packed 8 pixels per byte.
//!
//! # Planes
//!
//! - **Black/white** ([`Plane::BlackWhite`]): bit = LSB of the pixel's
//!   nearest full-palette index.
//! - **Red** ([`Plane::Red`]): bit = LSB of the index of the red-plane
//!   match.

mod planes;

pub use planes::{pack_plane, PackedPlanes, Plane};
