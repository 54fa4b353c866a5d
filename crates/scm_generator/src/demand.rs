//! Daily demand model.
//!
//! `demand = floor(base × market multiplier × weekend multiplier)` where the
//! base is drawn uniformly from [5, 30). Units sold are capped by the SKU's
//! available stock. The cap is a fixed daily capacity: sales never deplete
//! it, so the same ceiling applies on every simulated day.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use scm_core::types::Market;
use std::ops::Range;

/// Demand parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DemandModel {
    /// Half-open range the base demand is drawn from
    pub base_range: Range<u32>,
    /// Multiplier applied on Saturdays and Sundays
    pub weekend_multiplier: f64,
}

impl Default for DemandModel {
    fn default() -> Self {
        Self {
            base_range: 5..30,
            weekend_multiplier: 1.5,
        }
    }
}

impl DemandModel {
    /// Market demand multiplier.
    pub fn market_multiplier(market: Market) -> f64 {
        match market {
            Market::Latam => 4.0,
            Market::Nam => 0.6,
            Market::Emea | Market::Apac => 1.0,
        }
    }

    /// True for Saturday and Sunday.
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Draws a base demand.
    pub fn draw_base<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.base_range.clone())
    }

    /// Demand after market and weekend multipliers, floored.
    pub fn final_demand(&self, base: u32, market: Market, date: NaiveDate) -> u32 {
        let weekend = if Self::is_weekend(date) {
            self.weekend_multiplier
        } else {
            1.0
        };
        (f64::from(base) * Self::market_multiplier(market) * weekend).floor() as u32
    }

    /// Units sold: final demand capped at the available stock.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use scm_core::types::Market;
    /// use scm_generator::demand::DemandModel;
    ///
    /// let model = DemandModel::default();
    /// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    /// // 20 × 4.0 × 1.5 = 120, capped at 100
    /// assert_eq!(model.units_sold(20, Market::Latam, saturday, 100), 100);
    /// ```
    pub fn units_sold(&self, base: u32, market: Market, date: NaiveDate, available: u32) -> u32 {
        self.final_demand(base, market, date).min(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
    }

    #[test]
    fn test_weekend_detection() {
        assert!(!DemandModel::is_weekend(monday()));
        assert!(DemandModel::is_weekend(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
        assert!(DemandModel::is_weekend(sunday()));
    }

    #[test]
    fn test_final_demand_floors() {
        let model = DemandModel::default();
        // 7 × 0.6 = 4.2
        assert_eq!(model.final_demand(7, Market::Nam, monday()), 4);
        // 7 × 0.6 × 1.5 = 6.3
        assert_eq!(model.final_demand(7, Market::Nam, sunday()), 6);
        assert_eq!(model.final_demand(29, Market::Emea, monday()), 29);
        assert_eq!(model.final_demand(5, Market::Latam, sunday()), 30);
    }

    #[test]
    fn test_units_capped_by_available() {
        let model = DemandModel::default();
        assert_eq!(model.units_sold(29, Market::Latam, sunday(), 40), 40);
        assert_eq!(model.units_sold(10, Market::Apac, monday(), 0), 0);
        assert_eq!(model.units_sold(10, Market::Apac, monday(), 500), 10);
    }

    #[test]
    fn test_nam_minimum_demand_positive() {
        let model = DemandModel::default();
        // Smallest base on a weekday still yields a sale
        assert_eq!(model.final_demand(5, Market::Nam, monday()), 3);
    }

    #[test]
    fn test_base_draws_in_range() {
        let model = DemandModel::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let base = model.draw_base(&mut rng);
            assert!((5..30).contains(&base));
        }
    }
}
