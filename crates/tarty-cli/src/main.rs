//! tarty: pack a source tree into one compacted text archive.
//!
//! Usage:
//!     tarty -i ./project -o project.txt [-q] [--ignore-file NAME] [--config FILE]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tarty_core::TartyConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "tarty",
    version,
    about = "Create compacted single-file archives of a source tree for AI ingestion"
)]
struct Args {
    /// Input directory containing files to process
    #[arg(short = 'i', long = "input-dir", alias = "input_dir")]
    input_dir: PathBuf,

    /// Output archive file name
    #[arg(short = 'o', long = "output-file", alias = "output_file")]
    output_file: PathBuf,

    /// Suppress output of processed files
    #[arg(short, long)]
    quiet: bool,

    /// Ignore-rule file looked up at the input root
    #[arg(long)]
    ignore_file: Option<String>,

    /// JSON config file; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn resolve_config(&self) -> Result<TartyConfig> {
        let mut config = match &self.config {
            Some(path) => TartyConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => TartyConfig::default(),
        };
        if self.quiet {
            config.quiet = true;
        }
        if let Some(name) = &self.ignore_file {
            config.ignore_file = name.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    tracing::debug!(?config, input = %args.input_dir.display(), "starting");

    let summary = tarty_archive::pack(&args.input_dir, &args.output_file, &config)
        .with_context(|| format!("Failed to archive {}", args.input_dir.display()))?;

    tracing::info!(
        files = summary.outcome.files.len(),
        reduction_pct = summary.outcome.reduction_pct(),
        "done"
    );
    eprintln!(
        "tarty archive created: {} ({} bytes)",
        args.output_file.display(),
        summary.total_bytes
    );
    Ok(())
}
