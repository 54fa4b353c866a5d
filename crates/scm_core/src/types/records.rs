//! Rows of the generated CSV tables.
//!
//! Field renames fix the on-disk column names; the `*_COLUMNS` constants list
//! them in file order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::market::Market;

/// Inventory snapshot columns, in file order.
pub const INVENTORY_COLUMNS: [&str; 8] = [
    "SKU_ID",
    "Market",
    "Product",
    "Color",
    "Size",
    "Total_Stock",
    "Available_Stock",
    "Blocked_Stock",
];

/// Sales ledger columns, in file order.
pub const SALES_COLUMNS: [&str; 9] = [
    "Date",
    "SKU_ID",
    "Market",
    "Product",
    "Color",
    "Size",
    "Units_Sold",
    "Revenue_Local",
    "Currency",
];

/// One SKU of the inventory snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "SKU_ID")]
    pub sku_id: String,
    #[serde(rename = "Market")]
    pub market: Market,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Total_Stock")]
    pub total_stock: u32,
    #[serde(rename = "Available_Stock")]
    pub available_stock: u32,
    #[serde(rename = "Blocked_Stock")]
    pub blocked_stock: u32,
}

/// One (day, SKU) line of the sales ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "SKU_ID")]
    pub sku_id: String,
    #[serde(rename = "Market")]
    pub market: Market,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Units_Sold")]
    pub units_sold: u32,
    /// Revenue in the market's currency, rounded to 2 decimals
    #[serde(rename = "Revenue_Local")]
    pub revenue_local: f64,
    #[serde(rename = "Currency")]
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sale() -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            sku_id: "NAM-PRO-RED-US9".to_string(),
            market: Market::Nam,
            product: "Messi Spark Gen10 Pro".to_string(),
            color: "Solar Red".to_string(),
            size: "US 9".to_string(),
            units_sold: 20,
            revenue_local: 5000.0,
            currency: Currency::USD,
        }
    }

    #[test]
    fn test_sales_header_matches_columns() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_sale()).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = output.lines().next().unwrap();
        assert_eq!(header, SALES_COLUMNS.join(","));
    }

    #[test]
    fn test_sales_row_format() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_sale()).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let row = output.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2024-01-06,NAM-PRO-RED-US9,NAM,Messi Spark Gen10 Pro,Solar Red,US 9,20,5000.0,USD"
        );
    }

    #[test]
    fn test_inventory_header_matches_columns() {
        let record = InventoryRecord {
            sku_id: "NAM-PRO-RED-US9".to_string(),
            market: Market::Nam,
            product: "Messi Spark Gen10 Pro".to_string(),
            color: "Solar Red".to_string(),
            size: "US 9".to_string(),
            total_stock: 5000,
            available_stock: 4750,
            blocked_stock: 250,
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&record).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(output.lines().next().unwrap(), INVENTORY_COLUMNS.join(","));

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let parsed: InventoryRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(parsed, record);
    }
}
