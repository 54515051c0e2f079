//! MoneyMind - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use moneymind::{MoneyMindApp, OutputFormat};
use moneymind_common::init_logging;
use moneymind_config::ConfigLoader;
use std::path::PathBuf;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (YAML, TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(short, long)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only print the tab with this key, e.g. `overview` or `genZ`
    #[arg(short, long)]
    segment: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loader = args
        .config
        .map_or_else(ConfigLoader::discover, ConfigLoader::new)
        .with_log_level(args.log_level);
    let config = loader
        .load()
        .await
        .context("Failed to load configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!(
        config = ?loader.path(),
        segments = config.dataset.segments.len(),
        "Starting MoneyMind"
    );

    let app = MoneyMindApp::new(config);
    let report = app
        .report(args.segment.as_deref())
        .context("Failed to build dashboard")?;

    println!("{}", report.render(args.format)?);
    Ok(())
}
