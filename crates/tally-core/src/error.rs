//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── MoneyError       - Value, arithmetic and record failures          │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - File, JSON and config failures                 │
//! │                                                                         │
//! │  Flow: MoneyError → StoreError → CLI (anyhow) → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message
//! 3. Errors are enum variants, never String

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Money Error
// =============================================================================

/// Errors raised by [`Money`](crate::Money) and
/// [`MoneyCollection`](crate::MoneyCollection).
///
/// Every error is raised at the point of detection; nothing is retried and no
/// partially built value escapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount is negative at construction, or an operation (subtraction,
    /// interest) would drive it negative.
    #[error("Amount cannot be negative: {amount}")]
    InvalidAmount { amount: Decimal },

    /// Currency code is not exactly 3 characters after trimming.
    #[error("Invalid currency code '{code}': expected exactly 3 characters")]
    InvalidCurrencyCode { code: String },

    /// Arithmetic or ordering attempted across different currencies.
    ///
    /// ## User Workflow
    /// ```text
    /// "100.50 USD" + "200.75 EUR"
    ///      │
    ///      ▼
    /// CurrencyMismatch { expected: "USD", found: "EUR" }
    ///      │
    ///      ▼
    /// Caller decides: convert first, or reject the input
    /// ```
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Text is not of the form `<number> <currency>`.
    #[error("Cannot parse '{input}' as money: {reason}")]
    Parse { input: String, reason: String },

    /// `split` called with zero or negative parts.
    #[error("Part count must be positive, got {parts}")]
    InvalidPartCount { parts: i64 },

    /// Exchange rate is zero or negative.
    #[error("Exchange rate must be positive, got {rate}")]
    InvalidRate { rate: Decimal },

    /// A persisted record is missing a required field.
    #[error("Malformed money record: missing '{field}'")]
    MalformedRecord { field: &'static str },

    /// Amount does not fit in the supported range.
    #[error("Amount out of range: {amount}")]
    Overflow { amount: String },

    /// Collection index does not exist.
    #[error("Index {index} out of range for collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl MoneyError {
    /// Creates a Parse error for the given input.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        MoneyError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a CurrencyMismatch error from two currency codes.
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        MoneyError::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns true for the conditions callers are expected to recover from
    /// (bad user input, mixed currencies).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoneyError::CurrencyMismatch { .. } | MoneyError::Parse { .. }
        )
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

// =============================================================================
// Unit Tests
// =============================================================================
