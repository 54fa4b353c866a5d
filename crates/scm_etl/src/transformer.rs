//! Transformer stage.
//!
//! 1. Check both raw tables exist before touching the processed directory
//! 2. Load inventory and sales as text
//! 3. Add `Revenue_USD` to every sales row
//! 4. Count rows left without a normalised value
//! 5. Write processed sales and the unchanged inventory

use scm_core::config::PipelineConfig;
use scm_core::error::Result;
use scm_core::stage::{report_progress, PipelineStep, ProgressCallback, Stage, StageReport};
use scm_core::table::{read_raw_table, require_file, RawTable, TableWriter};
use scm_core::types::round2;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;
use tracing::{debug, info};

use crate::normalise::{normalisation_divisor, normalise_revenue};
use crate::records::{format_amount, SalesColumns, REQUIRED_SALES_COLUMNS};
use crate::validation::{validate_normalised, ValidationSummary};

/// Revenue totals for one currency code
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrencyTotals {
    pub rows: usize,
    pub units_sold: u64,
    pub revenue_local: f64,
    pub revenue_usd: f64,
}

/// Result of a transformer run
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    /// Stage report
    pub report: StageReport,
    /// Inventory rows passed through
    pub inventory_rows: usize,
    /// Sales rows written
    pub sales_rows: usize,
    /// Normalised-column check
    pub validation: ValidationSummary,
    /// Sum of every present `Revenue_USD`, rounded to cents
    pub total_revenue_usd: f64,
    /// Per currency code, as found in the sales table
    pub currency_totals: BTreeMap<String, CurrencyTotals>,
    /// Codes that had no divisor and passed through unchanged
    pub unknown_currencies: BTreeSet<String>,
}

/// Sales table with the normalised column filled in
struct NormalisedSales {
    table: RawTable,
    revenue_usd: Vec<Option<f64>>,
    currency_totals: BTreeMap<String, CurrencyTotals>,
    unknown_currencies: BTreeSet<String>,
}

/// Transformer stage
#[derive(Debug, Default, Clone, Copy)]
pub struct TransformerStage;

impl TransformerStage {
    /// Create a new transformer stage
    pub fn new() -> Self {
        Self
    }

    /// Normalise the raw tables in `config.raw_dir` into `config.processed_dir`.
    ///
    /// Fails with `MissingInput` without writing anything when either raw
    /// table is absent. Columns the transformer does not interpret, and the
    /// whole inventory table, are written back as read.
    pub fn execute(
        &self,
        config: &PipelineConfig,
        progress: Option<ProgressCallback>,
    ) -> Result<TransformOutcome> {
        let start = Instant::now();
        let sales_path = config.raw_sales_path();
        let inventory_path = config.raw_inventory_path();

        require_file(&sales_path)?;
        require_file(&inventory_path)?;

        info!(
            raw_dir = %config.raw_dir.display(),
            processed_dir = %config.processed_dir.display(),
            "Starting transformer"
        );

        report_progress(&progress, PipelineStep::LoadingRawData, 0.0);
        let sales = read_raw_table(&sales_path, &REQUIRED_SALES_COLUMNS)?;
        let columns = SalesColumns::locate(&sales, &sales_path)?;
        report_progress(&progress, PipelineStep::LoadingRawData, 0.5);
        let inventory = read_raw_table(&inventory_path, &[])?;
        report_progress(&progress, PipelineStep::LoadingRawData, 1.0);

        report_progress(&progress, PipelineStep::NormalisingCurrency, 0.0);
        let normalised = normalise_sales(&sales, columns);
        for code in &normalised.unknown_currencies {
            debug!(currency = %code, "No conversion rate, revenue passed through");
        }
        report_progress(&progress, PipelineStep::NormalisingCurrency, 1.0);

        report_progress(&progress, PipelineStep::Validating, 0.0);
        let validation = validate_normalised(&normalised.revenue_usd);
        report_progress(&progress, PipelineStep::Validating, 1.0);

        report_progress(&progress, PipelineStep::WritingProcessedData, 0.0);
        let mut writer = TableWriter::new(&config.processed_dir)?;
        writer.write_raw_table(&config.files.processed_sales, &normalised.table)?;
        report_progress(&progress, PipelineStep::WritingProcessedData, 0.5);
        writer.write_raw_table(&config.files.processed_inventory, &inventory)?;
        report_progress(&progress, PipelineStep::WritingProcessedData, 1.0);

        let total_revenue_usd = round2(normalised.revenue_usd.iter().flatten().sum());
        let duration_ms = start.elapsed().as_millis() as u64;

        for (code, totals) in &normalised.currency_totals {
            info!(
                currency = %code,
                rows = totals.rows,
                units_sold = totals.units_sold,
                revenue_local = %format!("{:.2}", totals.revenue_local),
                revenue_usd = %format!("{:.2}", totals.revenue_usd),
                "Currency breakdown"
            );
        }
        info!(
            sales_rows = normalised.table.len(),
            inventory_rows = inventory.len(),
            total_revenue_usd = %format!("{:.2}", total_revenue_usd),
            duration_ms,
            "Transformer completed"
        );
        report_progress(&progress, PipelineStep::Completed, 1.0);

        let mut report = StageReport::new(self.name(), duration_ms, writer.into_written_files());
        if !validation.is_complete() {
            report = report.with_warning(format!(
                "{} of {} sales rows have no Revenue_USD",
                validation.missing_normalised, validation.total_rows
            ));
        }
        if !normalised.unknown_currencies.is_empty() {
            let codes: Vec<&str> = normalised
                .unknown_currencies
                .iter()
                .map(String::as_str)
                .collect();
            report = report.with_warning(format!(
                "Revenue passed through unconverted for currencies: {}",
                codes.join(", ")
            ));
        }

        Ok(TransformOutcome {
            report,
            inventory_rows: inventory.len(),
            sales_rows: normalised.table.len(),
            validation,
            total_revenue_usd,
            currency_totals: normalised.currency_totals,
            unknown_currencies: normalised.unknown_currencies,
        })
    }
}

impl Stage for TransformerStage {
    fn name(&self) -> &str {
        "Transformer"
    }

    fn run(
        &self,
        config: &PipelineConfig,
        progress: Option<ProgressCallback>,
    ) -> Result<StageReport> {
        self.execute(config, progress).map(|outcome| outcome.report)
    }
}

fn normalise_sales(sales: &RawTable, columns: SalesColumns) -> NormalisedSales {
    let mut rows = Vec::with_capacity(sales.len());
    let mut revenue_usd = Vec::with_capacity(sales.len());
    let mut currency_totals: BTreeMap<String, CurrencyTotals> = BTreeMap::new();
    let mut unknown_currencies = BTreeSet::new();

    for row in &sales.rows {
        let fields = columns.read(row);
        if normalisation_divisor(fields.currency).is_none() {
            unknown_currencies.insert(fields.currency.to_string());
        }
        let usd = fields
            .revenue_local
            .map(|local| normalise_revenue(local, fields.currency));

        let totals = currency_totals.entry(fields.currency.to_string()).or_default();
        totals.rows += 1;
        totals.units_sold += fields.units_sold;
        totals.revenue_local += fields.revenue_local.unwrap_or(0.0);
        totals.revenue_usd += usd.unwrap_or(0.0);

        rows.push(columns.with_revenue_usd(row, &format_amount(usd)));
        revenue_usd.push(usd);
    }

    for totals in currency_totals.values_mut() {
        totals.revenue_local = round2(totals.revenue_local);
        totals.revenue_usd = round2(totals.revenue_usd);
    }

    NormalisedSales {
        table: RawTable {
            headers: columns.output_headers(&sales.headers),
            rows,
        },
        revenue_usd,
        currency_totals,
        unknown_currencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    fn sales(rows: &[(&str, u32, &str)]) -> RawTable {
        RawTable {
            headers: StringRecord::from(vec!["SKU_ID", "Units_Sold", "Revenue_Local", "Currency"]),
            rows: rows
                .iter()
                .map(|(currency, units, revenue)| {
                    StringRecord::from(vec![
                        "LATAM-ACADEMY-BLACK-US8".to_string(),
                        units.to_string(),
                        revenue.to_string(),
                        currency.to_string(),
                    ])
                })
                .collect(),
        }
    }

    fn normalise(table: &RawTable) -> NormalisedSales {
        let columns = SalesColumns::locate(table, Path::new("sales.csv")).unwrap();
        normalise_sales(table, columns)
    }

    #[test]
    fn test_normalise_sales() {
        let table = sales(&[("COP", 50, "27300000.0"), ("GBP", 1, "99.5"), ("COP", 2, "")]);
        let normalised = normalise(&table);

        assert_eq!(normalised.revenue_usd, vec![Some(7000.0), Some(99.5), None]);
        assert_eq!(
            normalised.unknown_currencies.into_iter().collect::<Vec<_>>(),
            vec!["GBP".to_string()]
        );
        assert_eq!(&normalised.table.headers[4], "Revenue_USD");
        assert_eq!(&normalised.table.rows[0][4], "7000.0");
        assert_eq!(&normalised.table.rows[2][4], "");
        assert_eq!(&normalised.table.rows[2][2], "");
    }

    #[test]
    fn test_currency_totals() {
        let table = sales(&[("COP", 50, "27300000.0"), ("COP", 1, "546000.0"), ("USD", 20, "5000.0")]);
        let totals = normalise(&table).currency_totals;

        let cop = totals["COP"];
        assert_eq!(cop.rows, 2);
        assert_eq!(cop.units_sold, 51);
        assert_eq!(cop.revenue_local, 27_846_000.0);
        assert_eq!(cop.revenue_usd, 7140.0);
        assert_eq!(totals["USD"].revenue_usd, 5000.0);
    }

    #[test]
    fn test_missing_inputs_leave_processed_dir_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            raw_dir: dir.path().join("raw"),
            processed_dir: dir.path().join("processed"),
            ..PipelineConfig::default()
        };

        let err = TransformerStage::new().execute(&config, None).unwrap_err();
        assert!(err.to_string().contains("Missing input file"));
        assert!(!config.processed_dir.exists());
    }

    #[test]
    fn test_progress_steps() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            days: 2,
            raw_dir: dir.path().join("raw"),
            processed_dir: dir.path().join("processed"),
            ..PipelineConfig::default()
        };
        scm_generator::GeneratorStage::new().execute(&config, None).unwrap();

        let steps = Arc::new(Mutex::new(Vec::new()));
        let steps_clone = steps.clone();
        let progress: ProgressCallback = Arc::new(move |step: PipelineStep, _pct: f64| {
            let mut steps = steps_clone.lock().unwrap();
            if steps.last() != Some(&step) {
                steps.push(step);
            }
        });

        let report = TransformerStage::new().run(&config, Some(progress)).unwrap();
        assert!(report.is_clean());
        assert_eq!(
            *steps.lock().unwrap(),
            vec![
                PipelineStep::LoadingRawData,
                PipelineStep::NormalisingCurrency,
                PipelineStep::Validating,
                PipelineStep::WritingProcessedData,
                PipelineStep::Completed,
            ]
        );
    }
}
