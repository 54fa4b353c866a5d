//! Check command implementation

use anyhow::Result;
use scm_core::config::PipelineConfig;
use tracing::info;

/// Report the validated configuration and the state of the data directories
pub fn run(config: &PipelineConfig) -> Result<()> {
    let skus = config.catalog.sku_ids()?;

    info!("Configuration OK");
    info!("  Seed: {}", config.seed);
    info!("  Period: {} for {} days", config.start_date, config.days);
    info!(
        "  Catalogue: {} markets x {} products x {} sizes x {} colours = {} SKUs",
        config.catalog.markets.len(),
        config.catalog.product_lines.len(),
        config.catalog.sizes.len(),
        config.catalog.colors.len(),
        skus.len()
    );

    for path in [config.raw_inventory_path(), config.raw_sales_path()] {
        let state = if path.is_file() { "present" } else { "missing" };
        info!("  Raw input {}: {}", path.display(), state);
    }
    for path in [config.processed_inventory_path(), config.processed_sales_path()] {
        let state = if path.is_file() { "present" } else { "missing" };
        info!("  Processed output {}: {}", path.display(), state);
    }

    Ok(())
}
