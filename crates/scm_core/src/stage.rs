//! Stage interface shared by the generator and the transformer.
//!
//! Each stage is a synchronous batch job: it receives the run configuration,
//! reports progress through an optional callback and returns a
//! [`StageReport`] describing what it wrote.

use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::table::WrittenFile;

/// Processing step within a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    /// Enumerating SKUs and drawing stock levels
    BuildingCatalog,
    /// Running the daily demand simulation
    SimulatingSales,
    /// Writing the generator's CSV files
    WritingRawData,
    /// Reading the generator's CSV files
    LoadingRawData,
    /// Adding the normalised revenue column
    NormalisingCurrency,
    /// Checking the normalised column for gaps
    Validating,
    /// Writing the transformer's CSV files
    WritingProcessedData,
    /// Stage completed
    Completed,
}

impl PipelineStep {
    /// Get the step name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::BuildingCatalog => "Building Catalog",
            Self::SimulatingSales => "Simulating Sales",
            Self::WritingRawData => "Writing Raw Data",
            Self::LoadingRawData => "Loading Raw Data",
            Self::NormalisingCurrency => "Normalising Currency",
            Self::Validating => "Validating",
            Self::WritingProcessedData => "Writing Processed Data",
            Self::Completed => "Completed",
        }
    }
}

/// Progress callback type for reporting stage progress (step, fraction done)
pub type ProgressCallback = Arc<dyn Fn(PipelineStep, f64) + Send + Sync>;

/// Report progress if a callback is provided
pub fn report_progress(progress: &Option<ProgressCallback>, step: PipelineStep, pct: f64) {
    if let Some(cb) = progress {
        cb(step, pct);
    }
}

/// Outcome of a single stage run
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Stage name
    pub stage: String,
    /// Execution duration in milliseconds
    pub duration_ms: u64,
    /// Data rows written across all files
    pub rows_written: usize,
    /// Files written by the stage
    pub files: Vec<WrittenFile>,
    /// Non-fatal issues encountered
    pub warnings: Vec<String>,
}

impl StageReport {
    /// Create a report for a finished stage
    pub fn new(stage: impl Into<String>, duration_ms: u64, files: Vec<WrittenFile>) -> Self {
        let rows_written = files.iter().map(|f| f.rows).sum();
        Self {
            stage: stage.into(),
            duration_ms,
            rows_written,
            files,
            warnings: Vec::new(),
        }
    }

    /// Add a warning to the report
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// True when the stage finished without warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Pipeline stage trait
///
/// Both pipeline stages implement this trait so a driver can run them in
/// sequence.
pub trait Stage {
    /// Get the stage name
    fn name(&self) -> &str;

    /// Execute the stage
    fn run(
        &self,
        config: &PipelineConfig,
        progress: Option<ProgressCallback>,
    ) -> Result<StageReport>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[test]
    fn test_step_names() {
        assert_eq!(PipelineStep::BuildingCatalog.name(), "Building Catalog");
        assert_eq!(PipelineStep::Completed.name(), "Completed");
    }

    #[test]
    fn test_report_sums_rows() {
        let files = vec![
            WrittenFile {
                path: PathBuf::from("a.csv"),
                rows: 288,
                bytes: 10,
            },
            WrittenFile {
                path: PathBuf::from("b.csv"),
                rows: 1000,
                bytes: 20,
            },
        ];
        let report = StageReport::new("Generator", 5, files);
        assert_eq!(report.rows_written, 1288);
        assert!(report.is_clean());
        assert!(!report.with_warning("gap").is_clean());
    }

    #[test]
    fn test_report_progress_invokes_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let progress: ProgressCallback = Arc::new(move |step: PipelineStep, pct: f64| {
            seen_clone.lock().unwrap().push((step, pct));
        });

        report_progress(&Some(progress), PipelineStep::Validating, 0.5);
        report_progress(&None, PipelineStep::Completed, 1.0);

        assert_eq!(*seen.lock().unwrap(), vec![(PipelineStep::Validating, 0.5)]);
    }
}
