//! EPD Image Converter
//!
//! Turns PNG/JPEG images into the two packed bit planes a 7.5" tri-color
//! e-paper panel expects, emitted as C arrays.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
