use serde::Deserialize;
use std::path::{Path, PathBuf};
use tricolor_dither::Palette;

use crate::error::ConfigError;

/// Environment variable consulted when no `--config` flag is given
pub const CONFIG_ENV_VAR: &str = "EPD_CONVERT_CONFIG";

/// Converter configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Panel colors as hex strings, in black, white, red order
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Hex literals per line in the generated .cpp file
    #[serde(default = "default_values_per_line")]
    pub values_per_line: usize,

    /// Also write a `<base>_preview.png` of the dithered image
    #[serde(default)]
    pub preview: bool,
}

fn default_palette() -> Vec<String> {
    Palette::DEFAULT_COLORS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_values_per_line() -> usize {
    16
}

impl ConverterConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to null, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            values_per_line = config.values_per_line,
            preview = config.preview,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve configuration from the `--config` flag, then the
    /// `EPD_CONVERT_CONFIG` environment variable, then built-in defaults
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::resolve_from(cli_path, env_path.as_deref())
    }

    /// Same as [`resolve`](Self::resolve) with the environment value passed in
    pub fn resolve_from(
        cli_path: Option<&Path>,
        env_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        match cli_path.or(env_path) {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Build the validated palette
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::from_hex(&self.palette)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.values_per_line == 0 {
            return Err(ConfigError::Invalid(
                "values_per_line must be at least 1".to_string(),
            ));
        }
        self.palette()?;
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            values_per_line: default_values_per_line(),
            preview: false,
        }
    }
}
