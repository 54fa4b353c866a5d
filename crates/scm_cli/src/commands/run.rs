//! Run command implementation
//!
//! Runs the generator and then the transformer. The transformer is skipped
//! when generation fails.

use anyhow::{Context, Result};
use scm_core::config::PipelineConfig;
use tracing::info;

/// Run both stages in order
pub fn run(config: &PipelineConfig) -> Result<()> {
    info!(seed = config.seed, days = config.days, "Running full pipeline");

    super::generate::run(config).context("Generator stage failed")?;
    super::transform::run(config).context("Transformer stage failed")?;

    info!("Pipeline complete");
    Ok(())
}
