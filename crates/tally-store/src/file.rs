//! # File Persistence
//!
//! Saves and loads money values as small JSON files.
//!
//! ## Open-Use-Close
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One call = one scoped file handle                   │
//! │                                                                         │
//! │  save_money(path, &money)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  File::create ──► BufWriter ──► codec::write_money ──► flush            │
//! │       │                                                                 │
//! │       └── handle dropped on every return path (Ok or Err)              │
//! │                                                                         │
//! │  load_money(path)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  File::open ──► BufReader ──► codec::read_money ──► NEW Money           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use tally_core::Money;
//! use tally_store::Persist;
//!
//! let money: Money = "1500.00 USD".parse().unwrap();
//! money.save("wallet.json").unwrap();
//!
//! let restored = Money::load("wallet.json").unwrap();
//! assert_eq!(restored, money);
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tally_core::{Money, MoneyCollection};
use tracing::{debug, info};

use crate::codec::{self, JsonStyle};
use crate::error::StoreResult;

// =============================================================================
// Path-Level Functions
// =============================================================================

/// Writes `money` to `path`, replacing any existing file.
pub fn save_money(path: &Path, money: &Money, style: JsonStyle) -> StoreResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    codec::write_money(&mut writer, money, style)?;
    writer.flush()?;

    info!(path = %path.display(), money = %money, "Saved money record");
    Ok(())
}

/// Reads a money record from `path` and returns it as a new value.
pub fn load_money(path: &Path) -> StoreResult<Money> {
    let reader = BufReader::new(File::open(path)?);
    let money = codec::read_money(reader)?;

    info!(path = %path.display(), money = %money, "Loaded money record");
    Ok(money)
}

/// Writes a collection to `path` as a JSON array.
pub fn save_collection(
    path: &Path,
    collection: &MoneyCollection,
    style: JsonStyle,
) -> StoreResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    codec::write_collection(&mut writer, collection, style)?;
    writer.flush()?;

    info!(path = %path.display(), count = collection.len(), "Saved money collection");
    Ok(())
}

/// Reads a collection from `path`.
pub fn load_collection(path: &Path) -> StoreResult<MoneyCollection> {
    let reader = BufReader::new(File::open(path)?);
    let collection = codec::read_collection(reader)?;

    info!(path = %path.display(), count = collection.len(), "Loaded money collection");
    Ok(collection)
}

/// Like [`load_collection`], but a missing file yields an empty collection.
pub fn load_collection_or_empty(path: &Path) -> StoreResult<MoneyCollection> {
    match load_collection(path) {
        Err(err) if err.is_not_found() => {
            debug!(path = %path.display(), "Collection file not found, starting empty");
            Ok(MoneyCollection::new())
        }
        other => other,
    }
}

// =============================================================================
// Persist Trait
// =============================================================================

/// `save` / `load` on the value types themselves.
///
/// `load` is a rehydrate: it returns a new value instead of overwriting an
/// existing one.
pub trait Persist: Sized {
    /// Writes the value to `path` as compact JSON.
    fn save<P: AsRef<Path>>(&self, path: P) -> StoreResult<()>;

    /// Reads a value back from `path`.
    fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self>;
}

impl Persist for Money {
    fn save<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        save_money(path.as_ref(), self, JsonStyle::Compact)
    }

    fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        load_money(path.as_ref())
    }
}

impl Persist for MoneyCollection {
    fn save<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        save_collection(path.as_ref(), self, JsonStyle::Compact)
    }

    fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        load_collection(path.as_ref())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
