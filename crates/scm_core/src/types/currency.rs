//! Reporting currencies.
//!
//! Every price in the catalogue is quoted in a base currency (USD). A market
//! books revenue in its own currency by multiplying the base amount with the
//! currency's fixed factor; normalisation divides by the same factor.
//!
//! # Examples
//!
//! ```
//! use scm_core::types::Currency;
//!
//! assert_eq!(Currency::COP.code(), "COP");
//! assert_eq!(Currency::COP.local_factor(), 3900.0);
//! assert_eq!("jpy".parse::<Currency>().unwrap(), Currency::JPY);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// ISO 4217 codes used by the four markets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    /// United States Dollar (base currency, factor 1)
    USD,
    /// Euro (factor 0.92)
    EUR,
    /// Colombian Peso (factor 3900)
    COP,
    /// Japanese Yen (factor 150)
    JPY,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::EUR, Currency::COP, Currency::JPY];

    /// Returns the ISO 4217 three-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::COP => "COP",
            Currency::JPY => "JPY",
        }
    }

    /// Units of this currency per unit of the base currency.
    ///
    /// ```
    /// use scm_core::types::Currency;
    ///
    /// assert_eq!(Currency::USD.local_factor(), 1.0);
    /// assert_eq!(Currency::EUR.local_factor(), 0.92);
    /// assert_eq!(Currency::JPY.local_factor(), 150.0);
    /// ```
    pub fn local_factor(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.92,
            Currency::COP => 3900.0,
            Currency::JPY => 150.0,
        }
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    /// Parses an ISO 4217 code (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "COP" => Ok(Currency::COP),
            "JPY" => Ok(Currency::JPY),
            _ => Err(DomainError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_roundtrip() {
        for currency in Currency::ALL {
            let parsed: Currency = currency.code().parse().unwrap();
            assert_eq!(currency, parsed);
        }
    }

    #[test]
    fn test_currency_from_str_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" Eur ".parse::<Currency>().unwrap(), Currency::EUR);
    }

    #[test]
    fn test_currency_from_str_unknown() {
        match "GBP".parse::<Currency>() {
            Err(DomainError::UnknownCurrency(code)) => assert_eq!(code, "GBP"),
            other => panic!("Expected UnknownCurrency error, got {:?}", other),
        }
    }

    #[test]
    fn test_local_factors_positive() {
        for currency in Currency::ALL {
            assert!(currency.local_factor() > 0.0);
        }
    }
}
