//! # Money Collection
//!
//! An ordered list of [`Money`] values, possibly in mixed currencies.
//!
//! ## Usage
//! ```rust
//! use tally_core::{Money, MoneyCollection};
//!
//! let mut wallet = MoneyCollection::new();
//! wallet.push("100.00 USD".parse().unwrap());
//! wallet.push(Money::parse("200.50 EUR").unwrap());
//!
//! assert_eq!(wallet.len(), 2);
//! assert_eq!(wallet.to_string(), "100.00 USD\n200.50 EUR");
//!
//! let removed = wallet.remove(0).unwrap();
//! assert_eq!(removed.to_string(), "100.00 USD");
//! ```

use std::fmt;
use std::ops::Index;
use std::slice::SliceIndex;

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;
use crate::types::MoneyRecord;

/// Ordered container of [`Money`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneyCollection {
    items: Vec<Money>,
}

impl MoneyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value at the end.
    pub fn push(&mut self, money: Money) {
        self.items.push(money);
    }

    /// Removes and returns the value at `index`.
    ///
    /// ## Errors
    /// [`MoneyError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> MoneyResult<Money> {
        if index >= self.items.len() {
            return Err(MoneyError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Money> {
        self.items.get(index)
    }

    /// Copies a sub-range into a new collection.
    ///
    /// Returns `None` if the range is out of bounds.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, MoneyCollection};
    ///
    /// let wallet: MoneyCollection = ["1 USD", "2 USD", "3 USD"]
    ///     .iter()
    ///     .map(|s| s.parse::<Money>().unwrap())
    ///     .collect();
    ///
    /// assert_eq!(wallet.slice(1..).unwrap().len(), 2);
    /// assert_eq!(wallet.slice(..).unwrap(), wallet);
    /// assert!(wallet.slice(2..5).is_none());
    /// ```
    pub fn slice<R>(&self, range: R) -> Option<MoneyCollection>
    where
        R: SliceIndex<[Money], Output = [Money]>,
    {
        self.items.get(range).map(|items| MoneyCollection {
            items: items.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Money> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Money] {
        &self.items
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Returns the persisted records, in order.
    pub fn to_records(&self) -> Vec<MoneyRecord> {
        self.items.iter().map(Money::to_record).collect()
    }

    /// Rebuilds a collection from persisted records.
    ///
    /// Every record is validated as in [`Money::from_record`]; the first bad
    /// record fails the whole load.
    pub fn from_records<I>(records: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = MoneyRecord>,
    {
        records
            .into_iter()
            .map(Money::from_record)
            .collect::<MoneyResult<Vec<_>>>()
            .map(|items| MoneyCollection { items })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// One display string per line.
impl fmt::Display for MoneyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, money) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{money}")?;
        }
        Ok(())
    }
}

impl Index<usize> for MoneyCollection {
    type Output = Money;

    fn index(&self, index: usize) -> &Money {
        &self.items[index]
    }
}

impl FromIterator<Money> for MoneyCollection {
    fn from_iter<T: IntoIterator<Item = Money>>(iter: T) -> Self {
        MoneyCollection {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Money> for MoneyCollection {
    fn extend<T: IntoIterator<Item = Money>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl IntoIterator for MoneyCollection {
    type Item = Money;
    type IntoIter = std::vec::IntoIter<Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoneyCollection {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet(texts: &[&str]) -> MoneyCollection {
        texts.iter().map(|t| t.parse::<Money>().unwrap()).collect()
    }

    #[test]
    fn test_push_and_index() {
        let mut c = MoneyCollection::new();
        assert!(c.is_empty());

        c.push(Money::usd(dec!(100)).unwrap());
        c.push("200.50 EUR".parse().unwrap());

        assert_eq!(c.len(), 2);
        assert_eq!(c[0].to_string(), "100.00 USD");
        assert_eq!(c.get(1).unwrap().to_string(), "200.50 EUR");
        assert!(c.get(2).is_none());
    }

    #[test]
    fn test_remove() {
        let mut c = wallet(&["1 USD", "2 EUR", "3 GBP"]);
        let removed = c.remove(1).unwrap();
        assert_eq!(removed.to_string(), "2.00 EUR");
        assert_eq!(c, wallet(&["1 USD", "3 GBP"]));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut c = wallet(&["1 USD"]);
        assert_eq!(
            c.remove(1),
            Err(MoneyError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_slice_copies() {
        let c = wallet(&["1 USD", "2 USD", "3 USD"]);
        let tail = c.slice(1..).unwrap();
        assert_eq!(tail, wallet(&["2 USD", "3 USD"]));
        assert_eq!(c.len(), 3);
        assert_eq!(c.slice(..0).unwrap().len(), 0);
        assert!(c.slice(4..).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(MoneyCollection::new().to_string(), "");
        assert_eq!(
            wallet(&["100 USD", "200.5 EUR"]).to_string(),
            "100.00 USD\n200.50 EUR"
        );
    }

    #[test]
    fn test_records_round_trip() {
        let c = wallet(&["100 USD", "0.01 JPY"]);
        let back = MoneyCollection::from_records(c.to_records()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_records_fails_on_first_bad_record() {
        let records = vec![
            MoneyRecord::new(dec!(1), "USD"),
            MoneyRecord {
                amount: Some(dec!(2)),
                currency: None,
            },
        ];
        assert_eq!(
            MoneyCollection::from_records(records),
            Err(MoneyError::MalformedRecord { field: "currency" })
        );
    }

    #[test]
    fn test_iteration() {
        let c = wallet(&["1 USD", "2 USD"]);
        let total: i64 = c.iter().map(Money::minor_units).sum();
        assert_eq!(total, 300);

        let mut extended = c.clone();
        extended.extend(c.clone());
        assert_eq!(extended.len(), 4);

        let owned: Vec<Money> = c.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
