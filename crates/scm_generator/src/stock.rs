//! Stock-level policy.
//!
//! Each market draws its total stock from a fixed half-open range. A share
//! of it is blocked (quality hold, customs) and the rest is available:
//!
//! | Market | Total stock     | Blocked |
//! |--------|-----------------|---------|
//! | NAM    | [2000, 8000)    | 5%      |
//! | EMEA   | [1000, 3000)    | 5%      |
//! | LATAM  | [50, 400)       | 35%     |
//! | APAC   | [500, 2000)     | 35%     |

use rand::Rng;
use scm_core::types::Market;
use std::ops::Range;

/// Stock split of one SKU. `total == available + blocked` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevels {
    /// Units on hand
    pub total: u32,
    /// Units that can be sold
    pub available: u32,
    /// Units held back
    pub blocked: u32,
}

/// Stock range and blocked share of a market
#[derive(Debug, Clone, PartialEq)]
pub struct StockPolicy {
    /// Half-open range total stock is drawn from
    pub range: Range<u32>,
    /// Share of total stock that is blocked
    pub blocked_fraction: f64,
}

impl StockPolicy {
    /// Policy for a market.
    pub fn for_market(market: Market) -> Self {
        let range = match market {
            Market::Nam => 2000..8000,
            Market::Emea => 1000..3000,
            Market::Latam => 50..400,
            Market::Apac => 500..2000,
        };
        let blocked_fraction = match market {
            Market::Latam | Market::Apac => 0.35,
            Market::Nam | Market::Emea => 0.05,
        };

        Self {
            range,
            blocked_fraction,
        }
    }

    /// Splits a total into blocked (floored) and available stock.
    ///
    /// ```
    /// use scm_core::types::Market;
    /// use scm_generator::stock::StockPolicy;
    ///
    /// let levels = StockPolicy::for_market(Market::Nam).split(5000);
    /// assert_eq!(levels.blocked, 250);
    /// assert_eq!(levels.available, 4750);
    /// ```
    pub fn split(&self, total: u32) -> StockLevels {
        let blocked = (f64::from(total) * self.blocked_fraction).floor() as u32;
        StockLevels {
            total,
            available: total - blocked,
            blocked,
        }
    }

    /// Draws a total stock level and splits it.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> StockLevels {
        self.split(rng.gen_range(self.range.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blocked_fractions() {
        assert_eq!(StockPolicy::for_market(Market::Nam).blocked_fraction, 0.05);
        assert_eq!(StockPolicy::for_market(Market::Emea).blocked_fraction, 0.05);
        assert_eq!(StockPolicy::for_market(Market::Latam).blocked_fraction, 0.35);
        assert_eq!(StockPolicy::for_market(Market::Apac).blocked_fraction, 0.35);
    }

    #[test]
    fn test_split_floors_blocked() {
        let levels = StockPolicy::for_market(Market::Latam).split(51);
        // 51 * 0.35 = 17.85
        assert_eq!(levels.blocked, 17);
        assert_eq!(levels.available, 34);
    }

    #[test]
    fn test_split_zero() {
        let levels = StockPolicy::for_market(Market::Apac).split(0);
        assert_eq!(levels, StockLevels { total: 0, available: 0, blocked: 0 });
    }

    #[test]
    fn test_draws_within_range_and_balanced() {
        let mut rng = StdRng::seed_from_u64(7);
        for market in Market::ALL {
            let policy = StockPolicy::for_market(market);
            for _ in 0..500 {
                let levels = policy.draw(&mut rng);
                assert!(policy.range.contains(&levels.total), "{:?} out of range", levels);
                assert_eq!(levels.total, levels.available + levels.blocked);
            }
        }
    }
}
