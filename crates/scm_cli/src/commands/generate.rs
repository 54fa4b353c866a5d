//! Generate command implementation

use anyhow::Result;
use scm_core::config::PipelineConfig;
use scm_generator::GeneratorStage;
use tracing::info;

use super::log_progress;

/// Run the generate command
pub fn run(config: &PipelineConfig) -> Result<()> {
    let outcome = GeneratorStage::new().execute(config, Some(log_progress()))?;

    for file in &outcome.report.files {
        info!(path = %file.path.display(), rows = file.rows, bytes = file.bytes, "Written");
    }
    info!(
        inventory_skus = outcome.inventory_rows,
        sales_transactions = outcome.sales_rows,
        units_sold = outcome.units_sold,
        "Raw data ready"
    );
    Ok(())
}
