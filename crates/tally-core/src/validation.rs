//! # Validation Module
//!
//! Input validation for every value that enters a [`Money`](crate::Money).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Money::new ─────────┐                                                  │
//! │  Money::parse ───────┤                                                  │
//! │  Money::from_record ─┼──► THIS MODULE ──► Money (invariants hold)       │
//! │  convert_to ─────────┤                                                  │
//! │  apply_interest ─────┘                                                  │
//! │                                                                         │
//! │  A Money value that exists has passed through here.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use tally_core::validation::{normalize_currency_code, validate_amount};
//!
//! assert_eq!(normalize_currency_code(" usd ").unwrap(), "USD");
//! assert!(validate_amount(Decimal::new(-1, 0)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};
use crate::CURRENCY_CODE_LEN;

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates that an amount is not negative.
///
/// The check runs on the raw value, before rounding to cents, so `-0.001`
/// is rejected even though it would round to zero.
pub fn validate_amount(amount: Decimal) -> MoneyResult<()> {
    if amount < Decimal::ZERO {
        return Err(MoneyError::InvalidAmount { amount });
    }
    Ok(())
}

/// Validates a minor-unit (cents) amount.
pub fn validate_minor_units(minor: i64) -> MoneyResult<()> {
    if minor < 0 {
        return Err(MoneyError::InvalidAmount {
            amount: Decimal::new(minor, crate::AMOUNT_SCALE),
        });
    }
    Ok(())
}

// =============================================================================
// Currency Validators
// =============================================================================

/// Trims and uppercases a currency code, then checks its length.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Exactly 3 characters after normalization
/// - Not checked against ISO-4217; `"XYZ"` is accepted
///
/// ## Example
/// ```rust
/// use tally_core::validation::normalize_currency_code;
///
/// assert_eq!(normalize_currency_code("eur").unwrap(), "EUR");
/// assert!(normalize_currency_code("US").is_err());
/// assert!(normalize_currency_code("USDT").is_err());
/// ```
pub fn normalize_currency_code(code: &str) -> MoneyResult<String> {
    let normalized = code.trim().to_uppercase();

    if normalized.chars().count() != CURRENCY_CODE_LEN {
        return Err(MoneyError::InvalidCurrencyCode {
            code: code.to_string(),
        });
    }

    Ok(normalized)
}

// =============================================================================
// Operation Validators
// =============================================================================

/// Validates the part count for [`Money::split`](crate::Money::split).
pub fn validate_part_count(parts: i64) -> MoneyResult<()> {
    if parts <= 0 {
        return Err(MoneyError::InvalidPartCount { parts });
    }
    Ok(())
}

/// Validates an exchange rate for [`Money::convert_to`](crate::Money::convert_to).
///
/// Zero and negative rates are rejected.
pub fn validate_rate(rate: Decimal) -> MoneyResult<()> {
    if rate <= Decimal::ZERO {
        return Err(MoneyError::InvalidRate { rate });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(dec!(0)).is_ok());
        assert!(validate_amount(dec!(100.50)).is_ok());
        assert!(matches!(
            validate_amount(dec!(-5)),
            Err(MoneyError::InvalidAmount { .. })
        ));
        assert!(validate_amount(dec!(-0.001)).is_err());
    }

    #[test]
    fn test_validate_minor_units() {
        assert!(validate_minor_units(0).is_ok());
        assert_eq!(
            validate_minor_units(-550),
            Err(MoneyError::InvalidAmount {
                amount: dec!(-5.50)
            })
        );
    }

    #[test]
    fn test_normalize_currency_code() {
        assert_eq!(normalize_currency_code("usd").unwrap(), "USD");
        assert_eq!(normalize_currency_code("  gbp\t").unwrap(), "GBP");
        assert_eq!(normalize_currency_code("X1z").unwrap(), "X1Z");
    }

    #[test]
    fn test_normalize_currency_code_rejects_bad_length() {
        for code in ["", "US", "USDT", "   ", " euro "] {
            assert!(
                matches!(
                    normalize_currency_code(code),
                    Err(MoneyError::InvalidCurrencyCode { .. })
                ),
                "expected {code:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_part_count() {
        assert!(validate_part_count(1).is_ok());
        assert_eq!(
            validate_part_count(0),
            Err(MoneyError::InvalidPartCount { parts: 0 })
        );
        assert_eq!(
            validate_part_count(-1),
            Err(MoneyError::InvalidPartCount { parts: -1 })
        );
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(dec!(0.92)).is_ok());
        assert!(validate_rate(dec!(0)).is_err());
        assert!(validate_rate(dec!(-1.5)).is_err());
    }
}
