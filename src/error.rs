use std::path::PathBuf;

use thiserror::Error;
use tricolor_dither::{DitherError, PaletteError};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
