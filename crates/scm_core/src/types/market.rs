//! Sales markets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::error::DomainError;

/// Regional market a SKU is stocked and sold in.
///
/// Serialised with its upper-case code (`NAM`, `EMEA`, `LATAM`, `APAC`).
///
/// # Examples
///
/// ```
/// use scm_core::types::{Currency, Market};
///
/// assert_eq!(Market::Latam.code(), "LATAM");
/// assert_eq!(Market::Latam.currency(), Currency::COP);
/// assert_eq!("emea".parse::<Market>().unwrap(), Market::Emea);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    /// North America
    Nam,
    /// Europe, Middle East and Africa
    Emea,
    /// Latin America
    Latam,
    /// Asia Pacific
    Apac,
}

impl Market {
    /// All markets in catalogue order.
    pub const ALL: [Market; 4] = [Market::Nam, Market::Emea, Market::Latam, Market::Apac];

    /// Upper-case market code used in SKU keys and CSV files.
    pub fn code(&self) -> &'static str {
        match self {
            Market::Nam => "NAM",
            Market::Emea => "EMEA",
            Market::Latam => "LATAM",
            Market::Apac => "APAC",
        }
    }

    /// Currency revenue is booked in. Determined by the market alone.
    pub fn currency(&self) -> Currency {
        match self {
            Market::Nam => Currency::USD,
            Market::Emea => Currency::EUR,
            Market::Latam => Currency::COP,
            Market::Apac => Currency::JPY,
        }
    }
}

impl FromStr for Market {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_uppercase().as_str() {
            "NAM" => Ok(Market::Nam),
            "EMEA" => Ok(Market::Emea),
            "LATAM" => Ok(Market::Latam),
            "APAC" => Ok(Market::Apac),
            _ => Err(DomainError::UnknownMarket(s.to_string())),
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
