//! # scm_etl
//!
//! Transformer stage of the supply-chain dataset pipeline.
//!
//! Reads the generator's raw tables, adds a `Revenue_USD` column that undoes
//! each market's currency factor, checks the new column for gaps and writes
//! both tables into the processed-data directory.
//!
//! ## Modules
//!
//! - [`normalise`]: currency code → divisor lookup and revenue normalisation
//! - [`records`]: the sales columns the transformer reads and the one it adds
//! - [`validation`]: gap count over the normalised column
//! - [`transformer`]: the [`TransformerStage`]

pub mod normalise;
pub mod records;
pub mod transformer;
pub mod validation;

pub use transformer::{CurrencyTotals, TransformOutcome, TransformerStage};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::normalise::{normalisation_divisor, normalise_revenue};
    pub use crate::records::{SaleFields, SalesColumns, REVENUE_USD_COLUMN};
    pub use crate::transformer::{CurrencyTotals, TransformOutcome, TransformerStage};
    pub use crate::validation::{validate_normalised, ValidationSummary};
}
