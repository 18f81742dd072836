pub mod config;
pub mod display_spec;

pub use config::{ConverterConfig, CONFIG_ENV_VAR};
pub use display_spec::DisplaySpec;
