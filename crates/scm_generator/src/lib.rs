//! # scm_generator
//!
//! Generator stage of the supply-chain dataset pipeline.
//!
//! Builds the SKU catalogue as the Cartesian product of markets, product
//! lines, sizes and colours, assigns every SKU a stock level, then simulates
//! one sales line per (day, SKU) pair with positive demand. Both tables are
//! written as CSV into the configured raw-data directory.
//!
//! ## Modules
//!
//! - [`stock`]: per-market stock ranges and blocked-stock split
//! - [`demand`]: daily demand with weekend and market multipliers
//! - [`pricing`]: tier prices and local-currency revenue
//! - [`generator`]: seeded dataset generation
//! - [`stage`]: the [`GeneratorStage`] that writes the CSV files

pub mod demand;
pub mod generator;
pub mod pricing;
pub mod stage;
pub mod stock;

pub use generator::{Dataset, DatasetGenerator};
pub use stage::{GenerationOutcome, GeneratorStage};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::demand::DemandModel;
    pub use crate::generator::{Dataset, DatasetGenerator};
    pub use crate::pricing::{price_sale, SaleAmount};
    pub use crate::stage::{GenerationOutcome, GeneratorStage};
    pub use crate::stock::{StockLevels, StockPolicy};
}
