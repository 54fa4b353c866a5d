//! Sales columns the transformer reads and writes.
//!
//! The sales table is kept as text. Only three cells of each row are
//! interpreted, and `Revenue_USD` is the one cell the transformer writes.
//! Every other column, known or not, is carried through as found.

use csv::StringRecord;
use scm_core::error::Result;
use scm_core::table::RawTable;
use std::path::Path;

/// Column added by the transformer
pub const REVENUE_USD_COLUMN: &str = "Revenue_USD";

/// Sales columns the transformer needs to find in the raw table
pub const REQUIRED_SALES_COLUMNS: [&str; 3] = ["Units_Sold", "Revenue_Local", "Currency"];

/// Positions of the interpreted columns within a sales table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesColumns {
    pub units_sold: usize,
    pub revenue_local: usize,
    pub currency: usize,
    /// Set when the input already carries a `Revenue_USD` column
    pub revenue_usd: Option<usize>,
}

/// Cells of one sales row as the transformer sees them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleFields<'a> {
    /// Units sold; zero when the cell is not a whole number
    pub units_sold: u64,
    /// Local revenue; `None` when the cell is empty or not a number
    pub revenue_local: Option<f64>,
    /// Currency code as written in the file
    pub currency: &'a str,
}

impl SalesColumns {
    /// Find the interpreted columns in `table`, which was read from `path`.
    pub fn locate(table: &RawTable, path: &Path) -> Result<Self> {
        Ok(Self {
            units_sold: table.require_column(path, "Units_Sold")?,
            revenue_local: table.require_column(path, "Revenue_Local")?,
            currency: table.require_column(path, "Currency")?,
            revenue_usd: table.column_index(REVENUE_USD_COLUMN),
        })
    }

    /// Read the interpreted cells of `row`
    pub fn read<'a>(&self, row: &'a StringRecord) -> SaleFields<'a> {
        SaleFields {
            units_sold: row
                .get(self.units_sold)
                .and_then(|cell| cell.trim().parse().ok())
                .unwrap_or(0),
            revenue_local: row.get(self.revenue_local).and_then(parse_amount),
            currency: row.get(self.currency).unwrap_or(""),
        }
    }

    /// Header of the processed table: the input header with `Revenue_USD` last,
    /// unless it is already present.
    pub fn output_headers(&self, headers: &StringRecord) -> StringRecord {
        let mut headers = headers.clone();
        if self.revenue_usd.is_none() {
            headers.push_field(REVENUE_USD_COLUMN);
        }
        headers
    }

    /// `row` with its normalised revenue cell set to `cell`
    pub fn with_revenue_usd(&self, row: &StringRecord, cell: &str) -> StringRecord {
        match self.revenue_usd {
            Some(idx) => row
                .iter()
                .enumerate()
                .map(|(i, field)| if i == idx { cell } else { field })
                .collect(),
            None => {
                let mut row = row.clone();
                row.push_field(cell);
                row
            }
        }
    }
}

/// Parse a monetary cell; empty, non-numeric and NaN cells are absent.
pub fn parse_amount(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Text written for a normalised amount; an absent amount is an empty cell.
pub fn format_amount(amount: Option<f64>) -> String {
    amount.map(|v| format!("{:?}", v)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(header: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: StringRecord::from(header.to_vec()),
            rows: rows.iter().map(|r| StringRecord::from(r.to_vec())).collect(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5000.0"), Some(5000.0));
        assert_eq!(parse_amount(" 27300000 "), Some(27_300_000.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("n/a"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(7000.0)), "7000.0");
        assert_eq!(format_amount(Some(240.8)), "240.8");
        assert_eq!(format_amount(None), "");
    }

    #[test]
    fn test_locate_and_read() {
        let sales = table(
            &["Channel", "Units_Sold", "Currency", "Revenue_Local"],
            &[&["web", "20", "USD", "5000.0"], &["store", "x", "EUR", ""]],
        );
        let columns = SalesColumns::locate(&sales, Path::new("sales.csv")).unwrap();
        assert_eq!(columns.units_sold, 1);
        assert_eq!(columns.revenue_usd, None);

        let first = columns.read(&sales.rows[0]);
        assert_eq!(first.units_sold, 20);
        assert_eq!(first.revenue_local, Some(5000.0));
        assert_eq!(first.currency, "USD");

        let second = columns.read(&sales.rows[1]);
        assert_eq!(second.units_sold, 0);
        assert_eq!(second.revenue_local, None);
    }

    #[test]
    fn test_locate_reports_missing_column() {
        let sales = table(&["Units_Sold", "Revenue_Local"], &[]);
        assert!(SalesColumns::locate(&sales, Path::new("sales.csv")).is_err());
    }

    #[test]
    fn test_revenue_usd_appended_or_replaced() {
        let fresh = table(&["Units_Sold", "Revenue_Local", "Currency"], &[&["1", "80.0", "USD"]]);
        let columns = SalesColumns::locate(&fresh, Path::new("a.csv")).unwrap();
        assert_eq!(
            columns.output_headers(&fresh.headers),
            StringRecord::from(vec!["Units_Sold", "Revenue_Local", "Currency", "Revenue_USD"])
        );
        assert_eq!(
            columns.with_revenue_usd(&fresh.rows[0], "80.0"),
            StringRecord::from(vec!["1", "80.0", "USD", "80.0"])
        );

        let rerun = table(
            &["Units_Sold", "Revenue_USD", "Revenue_Local", "Currency"],
            &[&["1", "stale", "73.6", "EUR"]],
        );
        let columns = SalesColumns::locate(&rerun, Path::new("b.csv")).unwrap();
        assert_eq!(columns.output_headers(&rerun.headers), rerun.headers);
        assert_eq!(
            columns.with_revenue_usd(&rerun.rows[0], "80.0"),
            StringRecord::from(vec!["1", "80.0", "73.6", "EUR"])
        );
    }
}
