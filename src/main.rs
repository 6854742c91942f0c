use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pnghash::models::{AppConfig, OutputFormat};
use pnghash::rendering::{write_comparison, write_hashes};
use pnghash::services::HashService;

#[derive(Parser)]
#[command(name = "pnghash")]
#[command(version)]
#[command(about = "Perceptual gradient and mean hashes for RGBA PNG images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Report format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// YAML configuration file
    #[arg(long, global = true, env = "PNGHASH_CONFIG")]
    config: Option<PathBuf>,

    /// Largest width * height decoded (overrides the config file)
    #[arg(long, global = true)]
    max_pixels: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the gradient and mean hash of each file
    Hash {
        /// PNG files (8-bit RGBA, non-interlaced)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print both files' hashes and the Hamming distances between them
    Compare {
        first: PathBuf,
        second: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pnghash=warn,png_phash=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config =
        AppConfig::load(cli.config.as_deref()).with_overrides(cli.format, cli.max_pixels);
    let service = HashService::new(&config)?;

    match cli.command {
        Commands::Hash { files } => run_hash_command(&service, &files, config.output),
        Commands::Compare { first, second } => {
            run_compare_command(&service, &first, &second, config.output)
        }
    }
}

fn run_hash_command(
    service: &HashService,
    files: &[PathBuf],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let reports = service.hash_files(files)?;
    let mut out = std::io::stdout().lock();
    write_hashes(&mut out, &reports, format)?;
    out.flush()?;
    Ok(())
}

fn run_compare_command(
    service: &HashService,
    first: &Path,
    second: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let report = service.compare(first, second)?;
    let mut out = std::io::stdout().lock();
    write_comparison(&mut out, &report, format)?;
    out.flush()?;
    Ok(())
}
