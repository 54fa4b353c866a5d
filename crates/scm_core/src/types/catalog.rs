//! Product catalogue and SKU key construction.
//!
//! A SKU is one (market, product line, size, colour) combination. Its key is
//! `{market}-{tier}-{colour token}-{size token}`, for example
//! `NAM-PRO-RED-US9`:
//!
//! - tier: last word of the product name, upper-cased
//! - colour token: second word of the colour name, upper-cased
//! - size token: size label with spaces removed

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::market::Market;

/// Price tier of a product line, taken from the last word of its name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductTier {
    /// Top tier
    Pro,
    /// Mid tier
    Academy,
    /// Entry tier; also used for any unrecognised tier word
    Club,
}

impl ProductTier {
    /// Derives the tier from a product line name.
    ///
    /// ```
    /// use scm_core::types::ProductTier;
    ///
    /// assert_eq!(ProductTier::from_product_name("Messi Spark Gen10 Pro"), ProductTier::Pro);
    /// assert_eq!(ProductTier::from_product_name("Messi Spark Gen10 Academy"), ProductTier::Academy);
    /// assert_eq!(ProductTier::from_product_name("Messi Spark Gen10 Lite"), ProductTier::Club);
    /// ```
    pub fn from_product_name(product: &str) -> Self {
        match tier_token(product).as_deref() {
            Some("PRO") => ProductTier::Pro,
            Some("ACADEMY") => ProductTier::Academy,
            _ => ProductTier::Club,
        }
    }

    /// Unit price in the base currency.
    pub fn unit_price(&self) -> f64 {
        match self {
            ProductTier::Pro => 250.0,
            ProductTier::Academy => 140.0,
            ProductTier::Club => 80.0,
        }
    }
}

fn tier_token(product: &str) -> Option<String> {
    product.split_whitespace().last().map(str::to_uppercase)
}

fn color_token(color: &str) -> Option<String> {
    color.split_whitespace().nth(1).map(str::to_uppercase)
}

fn size_token(size: &str) -> String {
    size.chars().filter(|c| !c.is_whitespace()).collect()
}

/// One catalogue entry before stock is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuSpec {
    /// Market the SKU is sold in
    pub market: Market,
    /// Full product line name
    pub product: String,
    /// Full colour name
    pub color: String,
    /// Size label, e.g. `US 9`
    pub size: String,
}

impl SkuSpec {
    /// Describe one catalogue SKU
    pub fn new(
        market: Market,
        product: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            market,
            product: product.into(),
            color: color.into(),
            size: size.into(),
        }
    }

    /// Price tier of the product line.
    pub fn tier(&self) -> ProductTier {
        ProductTier::from_product_name(&self.product)
    }

    /// Builds the composite SKU key.
    ///
    /// ```
    /// use scm_core::types::{Market, SkuSpec};
    ///
    /// let sku = SkuSpec::new(Market::Nam, "Messi Spark Gen10 Pro", "Solar Red", "US 9");
    /// assert_eq!(sku.sku_id().unwrap(), "NAM-PRO-RED-US9");
    /// ```
    pub fn sku_id(&self) -> Result<String, DomainError> {
        let tier =
            tier_token(&self.product).ok_or_else(|| DomainError::InvalidProduct(self.product.clone()))?;
        let color = color_token(&self.color).ok_or_else(|| DomainError::InvalidColor(self.color.clone()))?;

        Ok(format!(
            "{}-{}-{}-{}",
            self.market.code(),
            tier,
            color,
            size_token(&self.size)
        ))
    }
}

/// The dimensions the SKU catalogue is enumerated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Markets, outermost enumeration level
    pub markets: Vec<Market>,
    /// Product line names
    pub product_lines: Vec<String>,
    /// Shoe size labels
    pub sizes: Vec<String>,
    /// Colour names (at least two words each)
    pub colors: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            markets: Market::ALL.to_vec(),
            product_lines: vec![
                "Messi Spark Gen10 Pro".to_string(),
                "Messi Spark Gen10 Academy".to_string(),
                "Messi Spark Gen10 Club".to_string(),
            ],
            sizes: (6..=13).map(|s| format!("US {}", s)).collect(),
            colors: vec![
                "Solar Red".to_string(),
                "Core Black".to_string(),
                "Lucid Blue".to_string(),
            ],
        }
    }
}

impl Catalog {
    /// Number of SKUs in the full Cartesian product.
    pub fn len(&self) -> usize {
        self.markets.len() * self.product_lines.len() * self.sizes.len() * self.colors.len()
    }

    /// True if any dimension is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerates every SKU in market → product → size → colour order.
    pub fn skus(&self) -> Vec<SkuSpec> {
        let mut skus = Vec::with_capacity(self.len());
        for market in &self.markets {
            for product in &self.product_lines {
                for size in &self.sizes {
                    for color in &self.colors {
                        skus.push(SkuSpec::new(*market, product, color, size));
                    }
                }
            }
        }
        skus
    }

    /// Builds every SKU key, failing on malformed names or colliding keys.
    pub fn sku_ids(&self) -> Result<Vec<String>, DomainError> {
        let mut seen = HashSet::with_capacity(self.len());
        let mut ids = Vec::with_capacity(self.len());

        for sku in self.skus() {
            let id = sku.sku_id()?;
            if !seen.insert(id.clone()) {
                return Err(DomainError::DuplicateSku(id));
            }
            ids.push(id);
        }

        Ok(ids)
    }
}
