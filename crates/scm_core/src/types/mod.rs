//! Domain types for the supply-chain dataset.
//!
//! This module provides:
//! - [`Market`]: the four sales regions and the currency each one reports in
//! - [`Currency`]: reporting currencies with their factor against the base price
//! - [`Catalog`], [`SkuSpec`], [`ProductTier`]: catalogue enumeration and SKU keys
//! - [`InventoryRecord`], [`SalesRecord`]: rows of the generated CSV tables
//! - [`round2`]: two-decimal rounding used for every monetary column

pub mod catalog;
pub mod currency;
pub mod error;
pub mod market;
pub mod money;
pub mod records;

pub use catalog::{Catalog, ProductTier, SkuSpec};
pub use currency::Currency;
pub use error::DomainError;
pub use market::Market;
pub use money::round2;
pub use records::{InventoryRecord, SalesRecord, INVENTORY_COLUMNS, SALES_COLUMNS};
