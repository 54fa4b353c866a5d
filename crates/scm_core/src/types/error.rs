//! Errors raised while parsing or assembling domain values.

use thiserror::Error;

/// Domain parsing and catalogue errors.
///
/// # Examples
/// ```
/// use scm_core::types::DomainError;
///
/// let err = DomainError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency code: XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Currency code outside USD/EUR/COP/JPY
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Market code outside NAM/EMEA/LATAM/APAC
    #[error("Unknown market code: {0}")]
    UnknownMarket(String),

    /// Colour name without a second word to build the SKU colour token from
    #[error("Colour '{0}' needs at least two words to form a SKU token")]
    InvalidColor(String),

    /// Product name without any token
    #[error("Product name '{0}' is empty")]
    InvalidProduct(String),

    /// Two catalogue entries produced the same SKU key
    #[error("Duplicate SKU key: {0}")]
    DuplicateSku(String),
}
