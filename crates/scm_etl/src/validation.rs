//! Gap check over the normalised revenue column.

use tracing::{info, warn};

/// Outcome of the normalised-column check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Rows checked
    pub total_rows: usize,
    /// Rows without a normalised revenue
    pub missing_normalised: usize,
}

impl ValidationSummary {
    /// True when every row carries a normalised revenue
    pub fn is_complete(&self) -> bool {
        self.missing_normalised == 0
    }
}

/// Count absent values in the normalised revenue column and log the result.
///
/// Rows are neither dropped nor corrected.
pub fn validate_normalised(revenue_usd: &[Option<f64>]) -> ValidationSummary {
    let missing_normalised = revenue_usd.iter().filter(|v| v.is_none()).count();
    let summary = ValidationSummary {
        total_rows: revenue_usd.len(),
        missing_normalised,
    };

    if summary.is_complete() {
        info!(rows = summary.total_rows, "All currencies converted successfully");
    } else {
        warn!(
            rows = summary.total_rows,
            missing = summary.missing_normalised,
            "Some rows could not be converted"
        );
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete() {
        let summary = validate_normalised(&[Some(240.0), Some(80.0)]);
        assert_eq!(summary.total_rows, 2);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_gaps_counted() {
        let summary = validate_normalised(&[Some(240.0), None, None]);
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.missing_normalised, 2);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_empty_table_is_complete() {
        assert!(validate_normalised(&[]).is_complete());
    }
}
