//! Image decoding and resampling to the panel canvas.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;
use tricolor_dither::Raster;

use crate::error::ConvertError;
use crate::models::DisplaySpec;

/// Decode an image file and resample it to the panel canvas.
///
/// The format is detected from the file extension.
pub fn load_raster(path: &Path, spec: DisplaySpec) -> Result<Raster, ConvertError> {
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Decoded image"
    );
    to_raster(&img, spec)
}

/// Resize to exactly the panel size and drop any alpha channel.
///
/// The aspect ratio is not preserved; the image is stretched to fill the
/// canvas. Resampling uses Catmull-Rom (bicubic).
pub fn to_raster(img: &DynamicImage, spec: DisplaySpec) -> Result<Raster, ConvertError> {
    let rgb = if img.width() == spec.width && img.height() == spec.height {
        debug!("Image already at panel size, skipping resize");
        img.to_rgb8()
    } else {
        debug!(
            orig_w = img.width(),
            orig_h = img.height(),
            width = spec.width,
            height = spec.height,
            "Resizing image to panel size"
        );
        img.resize_exact(spec.width, spec.height, FilterType::CatmullRom)
            .to_rgb8()
    };

    let raster = Raster::from_rgb_bytes(
        rgb.as_raw(),
        spec.width as usize,
        spec.height as usize,
    )?;
    Ok(raster)
}
