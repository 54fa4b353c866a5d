//! Generator stage.
//!
//! Generates the dataset and writes both raw tables:
//! 1. Build the catalogue and draw stock levels
//! 2. Simulate the daily sales ledger
//! 3. Write inventory and sales CSV files into the raw-data directory

use scm_core::config::PipelineConfig;
use scm_core::error::Result;
use scm_core::stage::{report_progress, PipelineStep, ProgressCallback, Stage, StageReport};
use scm_core::table::TableWriter;
use scm_core::types::{INVENTORY_COLUMNS, SALES_COLUMNS};
use std::time::Instant;
use tracing::info;

use crate::generator::{Dataset, DatasetGenerator};

/// Result of a generator run
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Stage report
    pub report: StageReport,
    /// Inventory rows written
    pub inventory_rows: usize,
    /// Sales rows written
    pub sales_rows: usize,
    /// Units across all sales rows
    pub units_sold: u64,
}

/// Generator stage
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratorStage;

impl GeneratorStage {
    /// Create a new generator stage
    pub fn new() -> Self {
        Self
    }

    /// Generate the dataset and write it into `config.raw_dir`.
    pub fn execute(
        &self,
        config: &PipelineConfig,
        progress: Option<ProgressCallback>,
    ) -> Result<GenerationOutcome> {
        let start = Instant::now();
        config.validate()?;

        info!(
            seed = config.seed,
            days = config.days,
            skus = config.catalog.len(),
            raw_dir = %config.raw_dir.display(),
            "Starting generator"
        );

        report_progress(&progress, PipelineStep::BuildingCatalog, 0.0);
        let mut generator = DatasetGenerator::new(config);
        let inventory = generator.generate_inventory()?;
        report_progress(&progress, PipelineStep::BuildingCatalog, 1.0);

        report_progress(&progress, PipelineStep::SimulatingSales, 0.0);
        let sales = generator.simulate_sales(&inventory);
        report_progress(&progress, PipelineStep::SimulatingSales, 1.0);

        let dataset = Dataset { inventory, sales };

        report_progress(&progress, PipelineStep::WritingRawData, 0.0);
        let mut writer = TableWriter::new(&config.raw_dir)?;
        writer.write_table(&config.files.raw_inventory, &INVENTORY_COLUMNS, &dataset.inventory)?;
        report_progress(&progress, PipelineStep::WritingRawData, 0.5);
        writer.write_table(&config.files.raw_sales, &SALES_COLUMNS, &dataset.sales)?;
        report_progress(&progress, PipelineStep::WritingRawData, 1.0);

        let units_sold = dataset.units_sold();
        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            inventory_skus = dataset.inventory.len(),
            sales_transactions = dataset.sales.len(),
            units_sold,
            duration_ms,
            "Generator completed"
        );
        report_progress(&progress, PipelineStep::Completed, 1.0);

        Ok(GenerationOutcome {
            report: StageReport::new(self.name(), duration_ms, writer.into_written_files()),
            inventory_rows: dataset.inventory.len(),
            sales_rows: dataset.sales.len(),
            units_sold,
        })
    }
}

impl Stage for GeneratorStage {
    fn name(&self) -> &str {
        "Generator"
    }

    fn run(
        &self,
        config: &PipelineConfig,
        progress: Option<ProgressCallback>,
    ) -> Result<StageReport> {
        self.execute(config, progress).map(|outcome| outcome.report)
    }
}
