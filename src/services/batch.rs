//! Directory batch conversion.

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::services::ConversionService;

/// File extensions picked up from the input directory (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of inputs converted successfully
    pub converted: usize,
    /// Every file written, in processing order
    pub generated: Vec<PathBuf>,
    /// Inputs that failed, with the reason
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Regular files in `dir` with a supported extension, sorted by path
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Convert every supported image in `input_dir` into `output_dir`.
///
/// The output directory is created if missing. A failing image is logged
/// and recorded in the report; the remaining images are still processed.
pub fn run_batch(
    service: &ConversionService,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<BatchReport, ConvertError> {
    std::fs::create_dir_all(output_dir)?;
    let images = list_images(input_dir)?;
    tracing::info!(
        input = %input_dir.display(),
        output = %output_dir.display(),
        count = images.len(),
        "Converting images"
    );

    let mut report = BatchReport::default();
    for image in images {
        match service.convert_file(&image, output_dir) {
            Ok(paths) => {
                report.converted += 1;
                report.generated.extend(paths);
            }
            Err(e) => {
                tracing::error!(input = %image.display(), error = %e, "Conversion failed");
                report.failed.push((image, e));
            }
        }
    }

    Ok(report)
}
