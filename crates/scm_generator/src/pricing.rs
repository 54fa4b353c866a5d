//! Tier pricing and local-currency revenue.

use scm_core::types::{round2, Currency, Market, ProductTier};

/// Revenue of one sales line in the market's own currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleAmount {
    /// `units × unit price × currency factor`, rounded to 2 decimals
    pub revenue_local: f64,
    /// Currency of the market
    pub currency: Currency,
}

/// Prices `units` of a tier in `market`.
///
/// ```
/// use scm_core::types::{Currency, Market, ProductTier};
/// use scm_generator::pricing::price_sale;
///
/// let sale = price_sale(Market::Latam, ProductTier::Academy, 50);
/// assert_eq!(sale.currency, Currency::COP);
/// assert_eq!(sale.revenue_local, 27_300_000.0);
/// ```
pub fn price_sale(market: Market, tier: ProductTier, units: u32) -> SaleAmount {
    let currency = market.currency();
    let revenue = f64::from(units) * tier.unit_price() * currency.local_factor();

    SaleAmount {
        revenue_local: round2(revenue),
        currency,
    }
}
