//! # tally-core: Pure Money Logic for Tally
//!
//! This crate holds the `Money` value type and everything that works on it
//! without touching the outside world.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally CLI (apps/cli)                         │   │
//! │  │    show, add, split, convert, save, load, collection ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │ collection │  │ validation│  │   │
//! │  │   │   Money   │  │ Currency  │  │ MoneyColl. │  │   rules   │  │   │
//! │  │   │           │  │ MoneyRec. │  │            │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-store (File Layer)                     │   │
//! │  │              JSON records, config, save / load                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money value type with currency-checked arithmetic
//! - [`types`] - Currency code and persisted record shape
//! - [`collection`] - Ordered container of Money values
//! - [`error`] - Domain error types
//! - [`validation`] - Construction rules shared by every entry point
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: operations return new values, nothing mutates
//! 2. **No I/O**: file access lives in tally-store
//! 3. **Integer Cents**: amounts are stored as i64 minor units
//! 4. **Explicit Errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use tally_core::Money;
//!
//! let bill: Money = "100.00 USD".parse().unwrap();
//! let with_tip = bill.apply_interest(Decimal::new(15, 0)).unwrap();
//! assert_eq!(with_tip.formatted(), "USD 115.00");
//!
//! let shares = with_tip.split(4).unwrap();
//! assert_eq!(shares[3].to_string(), "28.75 USD");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use collection::MoneyCollection;
pub use error::{MoneyError, MoneyResult};
pub use money::Money;
pub use types::{Currency, MoneyRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency used when none is given.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Required length of a currency code, in characters.
pub const CURRENCY_CODE_LEN: usize = 3;

/// Fractional digits kept on every amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Minor units (cents) per major unit.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
