//! Seeded dataset generation.
//!
//! All random draws come from a single `StdRng` seeded from the
//! configuration: first one stock draw per SKU in catalogue order, then one
//! base-demand draw per (day, SKU) pair, day-major. The same seed and
//! catalogue therefore reproduce the same dataset.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scm_core::config::PipelineConfig;
use scm_core::error::Result;
use scm_core::types::{InventoryRecord, ProductTier, SalesRecord};
use tracing::info;

use crate::demand::DemandModel;
use crate::pricing::price_sale;
use crate::stock::StockPolicy;

/// Days between progress log lines during the sales simulation
const PROGRESS_INTERVAL_DAYS: u32 = 30;

/// Inventory snapshot and sales ledger of one run
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// One record per SKU, in catalogue order
    pub inventory: Vec<InventoryRecord>,
    /// Sales lines, ordered by day then catalogue order
    pub sales: Vec<SalesRecord>,
}

impl Dataset {
    /// Total units across the sales ledger
    pub fn units_sold(&self) -> u64 {
        self.sales.iter().map(|s| u64::from(s.units_sold)).sum()
    }
}

/// Generator for the inventory snapshot and the sales ledger
pub struct DatasetGenerator<'a> {
    /// Run configuration
    config: &'a PipelineConfig,
    /// Demand parameters
    demand: DemandModel,
    /// Random number generator
    rng: StdRng,
}

impl<'a> DatasetGenerator<'a> {
    /// Create a generator seeded from `config.seed`
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self {
            config,
            demand: DemandModel::default(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Enumerate the catalogue and draw a stock level for every SKU.
    pub fn generate_inventory(&mut self) -> Result<Vec<InventoryRecord>> {
        let config = self.config;
        let catalog = &config.catalog;
        let sku_ids = catalog.sku_ids()?;

        let inventory: Vec<InventoryRecord> = catalog
            .skus()
            .into_iter()
            .zip(sku_ids)
            .map(|(sku, sku_id)| {
                let levels = StockPolicy::for_market(sku.market).draw(&mut self.rng);
                InventoryRecord {
                    sku_id,
                    market: sku.market,
                    product: sku.product,
                    color: sku.color,
                    size: sku.size,
                    total_stock: levels.total,
                    available_stock: levels.available,
                    blocked_stock: levels.blocked,
                }
            })
            .collect();

        info!(skus = inventory.len(), "Inventory snapshot generated");
        Ok(inventory)
    }

    /// Simulate daily sales for every SKU of `inventory`.
    ///
    /// A base demand is drawn for every (day, SKU) pair, including pairs
    /// that end up without a sale, so the draw sequence only depends on the
    /// number of days and SKUs.
    pub fn simulate_sales(&mut self, inventory: &[InventoryRecord]) -> Vec<SalesRecord> {
        let tiers: Vec<ProductTier> = inventory
            .iter()
            .map(|r| ProductTier::from_product_name(&r.product))
            .collect();

        let config = self.config;
        let mut sales = Vec::new();

        for (day, date) in (0u32..).zip(config.simulation_dates()) {
            if day % PROGRESS_INTERVAL_DAYS == 0 {
                info!(
                    month = day / PROGRESS_INTERVAL_DAYS + 1,
                    date = %date,
                    "Simulating sales"
                );
            }

            for (record, tier) in inventory.iter().zip(&tiers) {
                let base = self.demand.draw_base(&mut self.rng);
                let units = self
                    .demand
                    .units_sold(base, record.market, date, record.available_stock);

                if units == 0 {
                    continue;
                }

                let sale = price_sale(record.market, *tier, units);
                sales.push(SalesRecord {
                    date,
                    sku_id: record.sku_id.clone(),
                    market: record.market,
                    product: record.product.clone(),
                    color: record.color.clone(),
                    size: record.size.clone(),
                    units_sold: units,
                    revenue_local: sale.revenue_local,
                    currency: sale.currency,
                });
            }
        }

        info!(transactions = sales.len(), "Sales ledger simulated");
        sales
    }

    /// Generate the inventory snapshot followed by the sales ledger.
    pub fn generate(mut self) -> Result<Dataset> {
        let inventory = self.generate_inventory()?;
        let sales = self.simulate_sales(&inventory);
        Ok(Dataset { inventory, sales })
    }
}
