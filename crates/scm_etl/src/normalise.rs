//! Currency normalisation.
//!
//! Local revenue was booked as `base amount × factor`; dividing by the same
//! factor recovers the base (USD) amount. The lookup is keyed by the raw
//! currency code from the file so unknown codes can pass through unchanged.

use scm_core::types::{round2, Currency};

/// Divisor that turns local revenue in `code` into USD, if the code is known.
///
/// ```
/// use scm_etl::normalise::normalisation_divisor;
///
/// assert_eq!(normalisation_divisor("COP"), Some(3900.0));
/// assert_eq!(normalisation_divisor("EUR"), Some(0.92));
/// assert_eq!(normalisation_divisor("USD"), Some(1.0));
/// assert_eq!(normalisation_divisor("GBP"), None);
/// ```
pub fn normalisation_divisor(code: &str) -> Option<f64> {
    code.parse::<Currency>().ok().map(|c| c.local_factor())
}

/// Converts local revenue to USD, rounded to 2 decimals.
///
/// Unknown currency codes are treated as already normalised.
///
/// ```
/// use scm_etl::normalise::normalise_revenue;
///
/// assert_eq!(normalise_revenue(27_300_000.0, "COP"), 7000.0);
/// assert_eq!(normalise_revenue(5000.0, "USD"), 5000.0);
/// assert_eq!(normalise_revenue(12.5, "XYZ"), 12.5);
/// ```
pub fn normalise_revenue(revenue_local: f64, code: &str) -> f64 {
    match normalisation_divisor(code) {
        Some(divisor) => round2(revenue_local / divisor),
        None => round2(revenue_local),
    }
}
