use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epd_image_converter::models::{ConverterConfig, DisplaySpec};
use epd_image_converter::services::{run_batch, ConversionService};

#[derive(Parser)]
#[command(name = "epd-convert")]
#[command(about = "Convert PNG/JPEG images into C arrays for the 7.5\" tri-color e-paper panel")]
struct Cli {
    /// Directory containing .png/.jpg/.jpeg images
    input_dir: PathBuf,

    /// Directory for the generated .cpp/.h files (created if missing)
    output_dir: PathBuf,

    /// YAML config file (falls back to $EPD_CONVERT_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write a <name>_preview.png of each dithered image
    #[arg(long)]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "epd_image_converter=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = ConverterConfig::resolve(cli.config.as_deref())?;
    if cli.preview {
        config.preview = true;
    }

    let service = ConversionService::new(&config, DisplaySpec::EPD_7IN5B_V2)?;
    let report = run_batch(&service, &cli.input_dir, &cli.output_dir)?;

    for path in &report.generated {
        println!("Generated: {}", path.display());
    }

    if !report.is_success() {
        for (path, e) in &report.failed {
            eprintln!("Failed: {}: {e}", path.display());
        }
        anyhow::bail!(
            "{} of {} images failed to convert",
            report.failed.len(),
            report.failed.len() + report.converted
        );
    }

    Ok(())
}
