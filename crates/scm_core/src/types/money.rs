//! Monetary rounding.

/// Rounds to two decimal places, half away from zero.
///
/// ```
/// use scm_core::types::round2;
///
/// assert_eq!(round2(4600.000000000001), 4600.0);
/// assert_eq!(round2(12.345678), 12.35);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
