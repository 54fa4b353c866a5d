//! # scm_core
//!
//! Shared foundation for the synthetic supply-chain dataset pipeline.
//!
//! The pipeline runs two batch stages that only communicate through CSV
//! files on disk:
//!
//! 1. **Generator** (`scm_generator`): builds the SKU catalogue and simulates
//!    a daily sales ledger in local currencies.
//! 2. **Transformer** (`scm_etl`): normalises local revenue into USD and
//!    re-writes both tables into the processed directory.
//!
//! This crate holds what both stages agree on:
//!
//! - [`types`]: markets, currencies, catalogue, SKU keys and CSV records
//! - [`config`]: the [`PipelineConfig`](config::PipelineConfig) threaded through a run
//! - [`error`]: the [`PipelineError`](error::PipelineError) type
//! - [`stage`]: the [`Stage`](stage::Stage) trait, progress callbacks and run reports
//! - [`table`]: CSV table reading and writing

pub mod config;
pub mod error;
pub mod stage;
pub mod table;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, FileNames, PipelineConfig};
    pub use crate::error::{PipelineError, Result};
    pub use crate::stage::{PipelineStep, ProgressCallback, Stage, StageReport};
    pub use crate::table::{read_raw_table, read_table, require_file, RawTable, TableWriter, WrittenFile};
    pub use crate::types::{
        round2, Catalog, Currency, DomainError, InventoryRecord, Market, ProductTier, SalesRecord,
        SkuSpec,
    };
}
