//! Test fixtures: images written to scratch directories.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Panel constants
pub mod panel {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 480;
    /// Bytes per packed plane for 800x480
    pub const PLANE_LEN: usize = 48_000;
}

/// Scratch input and output directories; the output one is not created.
pub struct Workspace {
    pub root: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create tempdir");
        let input = root.path().join("images");
        let output = root.path().join("out").join("generated");
        std::fs::create_dir(&input).expect("create input dir");
        Self {
            root,
            input,
            output,
        }
    }

    pub fn input_file(&self, name: &str) -> PathBuf {
        self.input.join(name)
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output.join(name)
    }
}

/// Single flat color image
pub fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Horizontal black-to-white ramp with a red band in the middle rows
pub fn test_card(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if y >= height / 3 && y < 2 * height / 3 && x < width / 2 {
            Rgb([220, 20, 20])
        } else {
            let v = (x * 255 / width.max(1)) as u8;
            Rgb([v, v, v])
        }
    })
}

/// Save an image; the format follows the file extension
pub fn write_image(path: &Path, img: &RgbImage) {
    img.save(path).expect("write fixture image");
}

/// A file with an image extension but garbage content
pub fn write_corrupt_image(path: &Path) {
    std::fs::write(path, b"definitely not a png").expect("write corrupt fixture");
}
