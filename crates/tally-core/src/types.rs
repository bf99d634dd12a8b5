//! # Domain Types
//!
//! Supporting types for [`Money`](crate::Money).
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Type Relationships                               │
//! │                                                                         │
//! │   Money ──────────── owns ───────────► Currency ("USD")                 │
//! │     │                                                                   │
//! │     │ to_record / from_record                                          │
//! │     ▼                                                                   │
//! │   MoneyRecord { amount, currency }  ◄──── JSON file (tally-store)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MoneyError, MoneyResult};
use crate::validation::normalize_currency_code;

// =============================================================================
// Currency
// =============================================================================

/// A 3-character, uppercase currency code.
///
/// Only the shape is checked. There is no ISO-4217 registry behind it, and
/// two currencies are the same iff their normalized codes are equal.
///
/// ## Example
/// ```rust
/// use tally_core::Currency;
///
/// let eur = Currency::new(" eur ").unwrap();
/// assert_eq!(eur.as_str(), "EUR");
/// assert!(Currency::new("EURO").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from a code, trimming and uppercasing it.
    pub fn new(code: &str) -> MoneyResult<Self> {
        normalize_currency_code(code).map(Currency)
    }

    /// US dollar, the default currency.
    pub fn usd() -> Self {
        Currency(crate::DEFAULT_CURRENCY.to_string())
    }

    /// Returns the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::usd()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.0
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Persisted Record
// =============================================================================

/// The flat persisted shape of a Money value.
///
/// ## Wire Format
/// ```json
/// { "amount": 1500.00, "currency": "USD" }
/// ```
///
/// Both fields are optional here so that a missing field is reported as
/// [`MoneyError::MalformedRecord`] instead of a generic JSON error. A record
/// becomes a `Money` only through [`Money::from_record`](crate::Money::from_record),
/// which runs the full construction validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneyRecord {
    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub currency: Option<String>,
}

impl MoneyRecord {
    /// Creates a complete record.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        MoneyRecord {
            amount: Some(amount),
            currency: Some(currency.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_normalization() {
        assert_eq!(Currency::new("usd").unwrap(), Currency::usd());
        assert_eq!("jpy".parse::<Currency>().unwrap().as_str(), "JPY");
        assert_eq!(Currency::default().to_string(), "USD");
    }

    #[test]
    fn test_currency_rejects_bad_codes() {
        assert!(matches!(
            Currency::new("US"),
            Err(MoneyError::InvalidCurrencyCode { .. })
        ));
    }

    #[test]
    fn test_currency_serde_validates() {
        let json = serde_json::to_string(&Currency::new("eur").unwrap()).unwrap();
        assert_eq!(json, "\"EUR\"");

        let parsed: Currency = serde_json::from_str("\"chf\"").unwrap();
        assert_eq!(parsed.as_str(), "CHF");

        assert!(serde_json::from_str::<Currency>("\"EURO\"").is_err());
    }

    #[test]
    fn test_record_wire_format() {
        let record = MoneyRecord::new(dec!(1500.00), "USD");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"amount":1500.00,"currency":"USD"}"#);
    }

    #[test]
    fn test_record_missing_fields_deserialize_as_none() {
        let record: MoneyRecord = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(record.amount, Some(dec!(12.5)));
        assert_eq!(record.currency, None);

        let record: MoneyRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, MoneyRecord::default());
    }
}
