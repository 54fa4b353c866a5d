//! scm - supply-chain dataset pipeline CLI
//!
//! # Commands
//!
//! - `scm generate` - Write the raw inventory snapshot and sales ledger
//! - `scm transform` - Normalise raw sales revenue into USD
//! - `scm run` - Generate then transform (default)
//! - `scm check` - Validate the configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use scm_core::config::{PipelineConfig, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

/// Synthetic retail supply-chain dataset generator
#[derive(Parser)]
#[command(name = "scm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Generate the raw inventory snapshot and sales ledger
    Generate,

    /// Add USD-normalised revenue to the raw sales ledger
    Transform,

    /// Generate, then transform
    Run,

    /// Validate configuration and show what a run would produce
    Check,
}

fn init_tracing(level: &str, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { level };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PipelineConfig::load_with_env_and_validate(&cli.config)?;
    init_tracing(&config.log_level, cli.verbose)?;

    if cli.verbose {
        info!(config = %cli.config.display(), "Verbose mode enabled");
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Generate => commands::generate::run(&config),
        Commands::Transform => commands::transform::run(&config),
        Commands::Run => commands::run::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
