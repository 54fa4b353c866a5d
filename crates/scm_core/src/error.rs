//! Error types for the pipeline stages.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::types::DomainError;

/// Pipeline error type
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Required input file is absent
    #[error("Missing input file: {}", .0.display())]
    MissingInput(PathBuf),

    /// Input file lacks a required column
    #[error("Missing required column '{column}' in {}", .path.display())]
    MissingColumn {
        /// File that was read
        path: PathBuf,
        /// Column that was expected
        column: String,
    },

    /// Catalogue or domain value error
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PipelineError {
    /// Create a missing input error
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput(path.into())
    }

    /// Create a missing column error
    pub fn missing_column(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }
}

/// Result alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::missing_input("data/01_Data_Raw/Adidas_Global_Sales.csv");
        assert_eq!(
            err.to_string(),
            "Missing input file: data/01_Data_Raw/Adidas_Global_Sales.csv"
        );

        let err = PipelineError::missing_column("sales.csv", "Currency");
        assert!(err.to_string().contains("'Currency'"));
    }

    #[test]
    fn test_from_domain_error() {
        let err: PipelineError = DomainError::DuplicateSku("NAM-PRO-RED-US9".to_string()).into();
        assert!(err.to_string().contains("NAM-PRO-RED-US9"));
    }
}
