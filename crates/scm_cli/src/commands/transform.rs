//! Transform command implementation

use anyhow::Result;
use scm_core::config::PipelineConfig;
use scm_etl::TransformerStage;
use tracing::{info, warn};

use super::log_progress;

/// Run the transform command
pub fn run(config: &PipelineConfig) -> Result<()> {
    let outcome = TransformerStage::new().execute(config, Some(log_progress()))?;

    for warning in &outcome.report.warnings {
        warn!("{}", warning);
    }
    info!(
        sales_rows = outcome.sales_rows,
        inventory_rows = outcome.inventory_rows,
        total_revenue_usd = %format!("{:.2}", outcome.total_revenue_usd),
        processed_dir = %config.processed_dir.display(),
        "Processed data ready"
    );
    Ok(())
}
