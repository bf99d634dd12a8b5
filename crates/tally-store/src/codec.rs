//! # JSON Codec
//!
//! Encodes and decodes money records over any `Read` / `Write`.
//!
//! ## Formats
//! ```text
//! Single value:   { "amount": 1500.00, "currency": "USD" }
//! Collection:     [ { "amount": 100.00, "currency": "USD" }, ... ]
//! ```
//!
//! Decoding always goes through [`Money::from_record`], so a missing field is
//! reported as `MalformedRecord` and a negative amount as `InvalidAmount`.

use std::io::{Read, Write};

use serde::Serialize;
use tally_core::{Money, MoneyCollection, MoneyRecord};

use crate::error::StoreResult;

/// Output layout for written JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no extra whitespace.
    #[default]
    Compact,

    /// Indented, one field per line.
    Pretty,
}

impl JsonStyle {
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}

fn write_json<W: Write, T: Serialize>(writer: W, value: &T, style: JsonStyle) -> StoreResult<()> {
    match style {
        JsonStyle::Compact => serde_json::to_writer(writer, value)?,
        JsonStyle::Pretty => serde_json::to_writer_pretty(writer, value)?,
    }
    Ok(())
}

/// Writes one money record.
pub fn write_money<W: Write>(writer: W, money: &Money, style: JsonStyle) -> StoreResult<()> {
    write_json(writer, &money.to_record(), style)
}

/// Reads one money record and rehydrates it.
pub fn read_money<R: Read>(reader: R) -> StoreResult<Money> {
    let record: MoneyRecord = serde_json::from_reader(reader)?;
    Ok(Money::from_record(record)?)
}

/// Writes a collection as a JSON array of records.
pub fn write_collection<W: Write>(
    writer: W,
    collection: &MoneyCollection,
    style: JsonStyle,
) -> StoreResult<()> {
    write_json(writer, &collection.to_records(), style)
}

/// Reads a JSON array of records; the first bad record fails the read.
pub fn read_collection<R: Read>(reader: R) -> StoreResult<MoneyCollection> {
    let records: Vec<MoneyRecord> = serde_json::from_reader(reader)?;
    Ok(MoneyCollection::from_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use tally_core::MoneyError;

    fn money(text: &str) -> Money {
        text.parse().unwrap()
    }

    #[test]
    fn test_write_money_compact() {
        let mut buf = Vec::new();
        write_money(&mut buf, &money("1500 USD"), JsonStyle::Compact).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"{"amount":1500.00,"currency":"USD"}"#
        );
    }

    #[test]
    fn test_write_money_pretty() {
        let mut buf = Vec::new();
        write_money(&mut buf, &money("12.34 EUR"), JsonStyle::Pretty).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(read_money(text.as_bytes()).unwrap(), money("12.34 EUR"));
    }

    #[test]
    fn test_read_money_accepts_integer_and_lowercase() {
        let m = read_money(r#"{"amount": 100, "currency": "usd"}"#.as_bytes()).unwrap();
        assert_eq!(m, money("100.00 USD"));
    }

    #[test]
    fn test_read_money_missing_field() {
        let err = read_money(r#"{"amount": 100}"#.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Money(MoneyError::MalformedRecord { field: "currency" })
        ));

        let err = read_money(r#"{"amount": null, "currency": "USD"}"#.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Money(MoneyError::MalformedRecord { field: "amount" })
        ));
    }

    #[test]
    fn test_read_money_revalidates() {
        let err = read_money(r#"{"amount": -3.5, "currency": "USD"}"#.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Money(MoneyError::InvalidAmount { .. })
        ));

        let err = read_money(r#"{"amount": 3.5, "currency": "US"}"#.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Money(MoneyError::InvalidCurrencyCode { .. })
        ));
    }

    #[test]
    fn test_read_money_bad_json() {
        assert!(matches!(
            read_money("not json".as_bytes()),
            Err(StoreError::Json(_))
        ));
        assert!(matches!(read_money("".as_bytes()), Err(StoreError::Json(_))));
        assert!(matches!(read_money("42".as_bytes()), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_collection_round_trip_preserves_order() {
        let collection: MoneyCollection = ["100 USD", "200.50 EUR", "0.01 JPY"]
            .iter()
            .map(|t| money(t))
            .collect();

        let mut buf = Vec::new();
        write_collection(&mut buf, &collection, JsonStyle::Compact).unwrap();
        assert!(buf.starts_with(b"["));

        let back = read_collection(buf.as_slice()).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn test_read_collection_rejects_bad_entry() {
        let json = r#"[{"amount": 1, "currency": "USD"}, {"currency": "EUR"}]"#;
        assert!(matches!(
            read_collection(json.as_bytes()),
            Err(StoreError::Money(MoneyError::MalformedRecord { field: "amount" }))
        ));
    }
}
