//! # Money Module
//!
//! Provides the `Money` type: a non-negative amount tied to a currency.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING PROBLEM                                                   │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Splitting $100.00 three ways:                                          │
//! │    $33.33 × 3 = $99.99  → $0.01 vanished                                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Decimal at the edges                     │
//! │    Stored:   10000 cents                                               │
//! │    Split:    3333 + 3333 + 3334 = 10000 (last share takes the rest)    │
//! │    Inputs/outputs (rates, percents, JSON) use rust_decimal::Decimal    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use tally_core::Money;
//!
//! let price: Money = "100.50 USD".parse().unwrap();
//! let tip = Money::new(Decimal::new(1050, 2), "usd").unwrap();
//!
//! let total = price.checked_add(&tip).unwrap();
//! assert_eq!(total.to_string(), "111.00 USD");
//!
//! let eur: Money = "10.00 EUR".parse().unwrap();
//! assert!(total.checked_add(&eur).is_err()); // no silent conversion
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{MoneyError, MoneyResult};
use crate::types::{Currency, MoneyRecord};
use crate::validation::{validate_amount, validate_minor_units, validate_part_count, validate_rate};
use crate::{AMOUNT_SCALE, MINOR_UNITS_PER_MAJOR};

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount of money, rounded to cents, in one currency.
///
/// ## Design Decisions
/// - **i64 minor units**: the amount is stored as whole cents, so equality
///   and ordering are exact
/// - **Private fields**: the only way in is through validated constructors
/// - **Value semantics**: every operation returns a new `Money`
/// - **No cross-currency ordering**: `partial_cmp` returns `None` and
///   [`Money::less_than`] returns [`MoneyError::CurrencyMismatch`]
///
/// ## Lifecycle
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                   How a Money value comes to exist                      │
/// │                                                                         │
/// │  Money::new(amount, "usd") ──┐                                          │
/// │  "100.50 USD".parse() ───────┼──► validate ──► round ──► Money          │
/// │  Money::from_record(rec) ────┘                              │           │
/// │                                                             ▼           │
/// │        checked_add / checked_sub / split / convert_to / apply_interest  │
/// │                        (always a NEW Money)                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord", into = "MoneyRecord")]
pub struct Money {
    minor: i64,
    currency: Currency,
}

impl Money {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a Money value, rounding the amount to 2 decimal places.
    ///
    /// ## Errors
    /// - [`MoneyError::InvalidAmount`] if `amount < 0`
    /// - [`MoneyError::InvalidCurrencyCode`] if the trimmed code is not 3
    ///   characters long
    /// - [`MoneyError::Overflow`] if the amount does not fit in i64 cents
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::Money;
    ///
    /// let money = Money::new(Decimal::new(100505, 3), "eur").unwrap(); // 100.505
    /// assert_eq!(money.to_string(), "100.50 EUR"); // half-to-even
    ///
    /// assert!(Money::new(Decimal::new(-5, 0), "USD").is_err());
    /// assert!(Money::new(Decimal::new(5, 0), "US").is_err());
    /// ```
    pub fn new(amount: Decimal, currency: &str) -> MoneyResult<Self> {
        validate_amount(amount)?;
        let currency = Currency::new(currency)?;
        let minor = to_minor_units(amount)?;
        Ok(Money { minor, currency })
    }

    /// Creates a Money value in the default currency (USD).
    pub fn usd(amount: Decimal) -> MoneyResult<Self> {
        Money::new(amount, crate::DEFAULT_CURRENCY)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let price = Money::from_minor(1099, "USD").unwrap();
    /// assert_eq!(price.to_string(), "10.99 USD");
    /// ```
    pub fn from_minor(minor: i64, currency: &str) -> MoneyResult<Self> {
        validate_minor_units(minor)?;
        Ok(Money {
            minor,
            currency: Currency::new(currency)?,
        })
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Money { minor: 0, currency }
    }

    /// Parses the display form `"<amount> <currency>"`.
    ///
    /// The input must split into exactly two whitespace-separated tokens.
    /// The amount accepts plain (`100.50`) and scientific (`1e3`) notation;
    /// construction rules from [`Money::new`] then apply.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let money = Money::parse("200.50 eur").unwrap();
    /// assert_eq!(money.currency().as_str(), "EUR");
    ///
    /// assert!(Money::parse("200.50").is_err());
    /// assert!(Money::parse("USD 1,500.00").is_err());
    /// ```
    pub fn parse(text: &str) -> MoneyResult<Self> {
        let mut tokens = text.split_whitespace();
        let (amount, currency) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(amount), Some(currency), None) => (amount, currency),
            _ => return Err(MoneyError::parse(text, "expected '<amount> <currency>'")),
        };

        let amount = Decimal::from_str(amount)
            .or_else(|_| Decimal::from_scientific(amount))
            .map_err(|e| MoneyError::parse(text, e.to_string()))?;

        Money::new(amount, currency)
    }

    /// Rehydrates a Money value from its persisted record.
    ///
    /// Missing fields fail with [`MoneyError::MalformedRecord`]; present
    /// fields go through the same validation as [`Money::new`], so a
    /// hand-edited file cannot smuggle in a negative amount.
    pub fn from_record(record: MoneyRecord) -> MoneyResult<Self> {
        let amount = record
            .amount
            .ok_or(MoneyError::MalformedRecord { field: "amount" })?;
        let currency = record
            .currency
            .ok_or(MoneyError::MalformedRecord { field: "currency" })?;
        Money::new(amount, &currency)
    }

    /// Returns the persisted record for this value.
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord::new(self.amount(), self.currency.as_str())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The amount as a decimal with exactly 2 fractional digits.
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.minor, AMOUNT_SCALE)
    }

    /// The amount in cents.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Checks if the amount is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.minor > 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.minor == 0
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Adds two amounts of the same currency.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let a: Money = "100.50 USD".parse().unwrap();
    /// let b: Money = "200.75 USD".parse().unwrap();
    /// assert_eq!(a.checked_add(&b).unwrap().to_string(), "301.25 USD");
    ///
    /// let eur: Money = "200.75 EUR".parse().unwrap();
    /// assert!(a.checked_add(&eur).is_err());
    /// ```
    pub fn checked_add(&self, other: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(other)?;
        let minor = self
            .minor
            .checked_add(other.minor)
            .ok_or_else(|| MoneyError::Overflow {
                amount: format!("{} + {}", self.amount(), other.amount()),
            })?;
        Ok(self.with_minor(minor))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// Fails with [`MoneyError::InvalidAmount`] if the result would be
    /// negative.
    pub fn checked_sub(&self, other: &Money) -> MoneyResult<Money> {
        self.ensure_same_currency(other)?;
        // Both operands are non-negative, so this cannot overflow.
        let minor = self.minor - other.minor;
        validate_minor_units(minor)?;
        Ok(self.with_minor(minor))
    }

    /// Converts to another currency using a caller-supplied rate.
    ///
    /// `rate` is "units of target per unit of self"; no reciprocal check is
    /// made. The result is rounded to cents.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::Money;
    ///
    /// let usd: Money = "100.00 USD".parse().unwrap();
    /// let eur = usd.convert_to("EUR", Decimal::new(92, 2)).unwrap();
    /// assert_eq!(eur.to_string(), "92.00 EUR");
    ///
    /// assert!(usd.convert_to("EUR", Decimal::ZERO).is_err());
    /// ```
    pub fn convert_to(&self, target_currency: &str, rate: Decimal) -> MoneyResult<Money> {
        validate_rate(rate)?;
        let converted = self
            .amount()
            .checked_mul(rate)
            .ok_or_else(|| MoneyError::Overflow {
                amount: format!("{} * {}", self.amount(), rate),
            })?;
        Money::new(converted, target_currency)
    }

    /// Applies a percentage: `amount * (1 + percent / 100)`.
    ///
    /// Negative percentages are allowed as long as the result stays
    /// non-negative; anything below -100% fails with
    /// [`MoneyError::InvalidAmount`].
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::Money;
    ///
    /// let deposit: Money = "100.00 USD".parse().unwrap();
    /// let grown = deposit.apply_interest(Decimal::TEN).unwrap();
    /// assert_eq!(grown.to_string(), "110.00 USD");
    /// ```
    pub fn apply_interest(&self, percent: Decimal) -> MoneyResult<Money> {
        let overflow = || MoneyError::Overflow {
            amount: format!("{} at {}%", self.amount(), percent),
        };
        let factor = Decimal::ONE
            .checked_add(percent / Decimal::ONE_HUNDRED)
            .ok_or_else(overflow)?;
        let grown = self.amount().checked_mul(factor).ok_or_else(overflow)?;
        Money::new(grown, self.currency.as_str())
    }

    /// Splits the amount into `parts` shares that sum exactly to the original.
    ///
    /// Every share but the last is the per-part amount rounded to the cent
    /// (half to even); the last share absorbs the remainder. When rounding up
    /// would leave the last share negative (0.15 in 10 parts), the per-part
    /// amount is truncated instead.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let bill: Money = "100.00 USD".parse().unwrap();
    /// let shares: Vec<String> = bill
    ///     .split(3)
    ///     .unwrap()
    ///     .iter()
    ///     .map(|m| m.to_string())
    ///     .collect();
    /// assert_eq!(shares, ["33.33 USD", "33.33 USD", "33.34 USD"]);
    /// ```
    ///
    /// ## Errors
    /// - [`MoneyError::InvalidPartCount`] if `parts <= 0`
    /// - [`MoneyError::Overflow`] if `parts` shares cannot be allocated
    pub fn split(&self, parts: i64) -> MoneyResult<Vec<Money>> {
        validate_part_count(parts)?;

        let too_many = || MoneyError::Overflow {
            amount: format!("{} in {} shares", self.amount(), parts),
        };
        let count = usize::try_from(parts).map_err(|_| too_many())?;
        let mut shares: Vec<Money> = Vec::new();
        shares.try_reserve_exact(count).map_err(|_| too_many())?;

        let share = self.share_minor(parts);
        let last = self.minor - share * (parts - 1);

        shares.extend((1..count).map(|_| self.with_minor(share)));
        shares.push(self.with_minor(last));
        Ok(shares)
    }

    /// Per-part cents for `split`: rounded half to even, or truncated when
    /// the rounded shares would exceed the total.
    fn share_minor(&self, parts: i64) -> i64 {
        let truncated = self.minor / parts;
        let rem = self.minor % parts;

        let round_up = rem > parts - rem || (rem == parts - rem && truncated % 2 == 1);
        if !round_up {
            return truncated;
        }

        let rounded = truncated + 1;
        match rounded.checked_mul(parts - 1) {
            Some(allocated) if allocated <= self.minor => rounded,
            _ => truncated,
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compares two amounts of the same currency.
    ///
    /// ## Errors
    /// [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn try_cmp(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.minor.cmp(&other.minor))
    }

    /// Returns true if `self` is strictly less than `other`.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let small: Money = "50.00 USD".parse().unwrap();
    /// let big: Money = "100.00 USD".parse().unwrap();
    /// assert!(small.less_than(&big).unwrap());
    ///
    /// let eur: Money = "50.00 EUR".parse().unwrap();
    /// assert!(big.less_than(&eur).is_err());
    /// ```
    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Human-readable form with thousands separators: `"USD 1,500.00"`.
    ///
    /// Display only; [`Money::parse`] does not accept it. Use the `Display`
    /// impl (`"1500.00 USD"`) for anything that must be read back.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Money;
    ///
    /// let money = Money::from_minor(123456789, "USD").unwrap();
    /// assert_eq!(money.formatted(), "USD 1,234,567.89");
    /// ```
    pub fn formatted(&self) -> String {
        format!(
            "{} {}.{:02}",
            self.currency,
            group_thousands(self.major_part()),
            self.cents_part()
        )
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::mismatch(
                self.currency.as_str(),
                other.currency.as_str(),
            ));
        }
        Ok(())
    }

    fn with_minor(&self, minor: i64) -> Money {
        Money {
            minor,
            currency: self.currency.clone(),
        }
    }

    #[inline]
    const fn major_part(&self) -> i64 {
        self.minor / MINOR_UNITS_PER_MAJOR
    }

    #[inline]
    const fn cents_part(&self) -> i64 {
        self.minor % MINOR_UNITS_PER_MAJOR
    }
}

/// Rounds to cents (half-to-even) and converts to integer minor units.
fn to_minor_units(amount: Decimal) -> MoneyResult<i64> {
    let mut rounded = amount.round_dp(AMOUNT_SCALE);
    rounded.rescale(AMOUNT_SCALE);
    i64::try_from(rounded.mantissa()).map_err(|_| MoneyError::Overflow {
        amount: amount.to_string(),
    })
}

/// Inserts a comma every three digits: `1234567` → `"1,234,567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Canonical round-trip form: `"100.50 USD"`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02} {}",
            self.major_part(),
            self.cents_part(),
            self.currency
        )
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

/// Ordering exists only within one currency.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::from_record(record)
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        money.to_record()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
