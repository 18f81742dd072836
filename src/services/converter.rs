use std::path::{Path, PathBuf};

use tricolor_dither::{PackedPlanes, Palette, Raster, TricolorConverter};

use crate::error::{ConfigError, ConvertError};
use crate::models::{ConverterConfig, DisplaySpec};
use crate::rendering::{c_identifier, encode_preview, load_raster, CArrayFiles};

/// Result of converting one in-memory raster
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The dithered raster, holding palette colors only
    pub quantized: Raster,
    pub planes: PackedPlanes,
}

/// Converts single images into C source files for the panel
pub struct ConversionService {
    spec: DisplaySpec,
    converter: TricolorConverter,
    values_per_line: usize,
    preview: bool,
}

impl ConversionService {
    pub fn new(config: &ConverterConfig, spec: DisplaySpec) -> Result<Self, ConfigError> {
        let palette = config.palette()?;
        Ok(Self {
            spec,
            converter: spec.converter(palette),
            values_per_line: config.values_per_line,
            preview: config.preview,
        })
    }

    pub fn spec(&self) -> DisplaySpec {
        self.spec
    }

    pub fn palette(&self) -> &Palette {
        self.converter.palette()
    }

    /// Dither and pack a raster already at panel size
    pub fn convert_raster(&self, raster: Raster) -> Result<Conversion, ConvertError> {
        let quantized = self.converter.quantize(raster)?;
        let planes = self.converter.pack(&quantized)?;
        tracing::debug!(
            width = planes.width(),
            height = planes.height(),
            bytes = planes.plane_len(),
            "Packed bit planes"
        );
        Ok(Conversion { quantized, planes })
    }

    /// Convert one image file and write `<base>.cpp` and `<base>.h`
    /// (plus `<base>_preview.png` when previews are enabled) into
    /// `output_dir`. Returns the written paths in that order.
    pub fn convert_file(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let stem = input
            .file_stem()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConvertError::InvalidFileName(input.to_path_buf()))?;
        let base = c_identifier(&stem.to_string_lossy());

        let raster = load_raster(input, self.spec)?;
        let conversion = self.convert_raster(raster)?;
        let files = CArrayFiles::render(&base, &conversion.planes, self.values_per_line);

        let mut written = Vec::with_capacity(3);

        let source_path = output_dir.join(format!("{base}.cpp"));
        std::fs::write(&source_path, &files.source)?;
        written.push(source_path);

        let header_path = output_dir.join(format!("{base}.h"));
        std::fs::write(&header_path, &files.header)?;
        written.push(header_path);

        if self.preview {
            let png = encode_preview(&conversion.quantized, self.palette())?;
            let preview_path = output_dir.join(format!("{base}_preview.png"));
            std::fs::write(&preview_path, png)?;
            written.push(preview_path);
        }

        for path in &written {
            tracing::info!(
                input = %input.display(),
                output = %path.display(),
                "Generated file"
            );
        }

        Ok(written)
    }
}
