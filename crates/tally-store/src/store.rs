//! # Money Store
//!
//! Config-driven entry point over [`crate::file`].
//!
//! ```rust,no_run
//! use tally_core::Money;
//! use tally_store::{MoneyStore, StoreConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MoneyStore::new(StoreConfig::load(None)?);
//! let money: Money = "1500.00 USD".parse()?;
//! store.save_money(&money)?;
//! assert_eq!(store.load_money()?, money);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tally_core::{Money, MoneyCollection};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::file;

/// Reads and writes the configured money and collection files.
#[derive(Debug, Clone)]
pub struct MoneyStore {
    config: StoreConfig,
}

impl MoneyStore {
    pub fn new(config: StoreConfig) -> Self {
        MoneyStore { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Single Value
    // =========================================================================

    /// Saves to the configured money file, or to `path` if given.
    pub fn save_money_to(&self, money: &Money, path: Option<&Path>) -> StoreResult<PathBuf> {
        let path = self.resolve(path, StoreConfig::money_path)?;
        file::save_money(&path, money, self.config.json_style())?;
        Ok(path)
    }

    pub fn save_money(&self, money: &Money) -> StoreResult<PathBuf> {
        self.save_money_to(money, None)
    }

    /// Loads from the configured money file, or from `path` if given.
    pub fn load_money_from(&self, path: Option<&Path>) -> StoreResult<Money> {
        match path {
            Some(path) => file::load_money(path),
            None => file::load_money(&self.config.money_path()),
        }
    }

    pub fn load_money(&self) -> StoreResult<Money> {
        self.load_money_from(None)
    }

    // =========================================================================
    // Collection
    // =========================================================================

    pub fn save_collection(&self, collection: &MoneyCollection) -> StoreResult<PathBuf> {
        let path = self.resolve(None, StoreConfig::collection_path)?;
        file::save_collection(&path, collection, self.config.json_style())?;
        Ok(path)
    }

    /// Loads the collection; a missing file is an empty collection.
    pub fn load_collection(&self) -> StoreResult<MoneyCollection> {
        file::load_collection_or_empty(&self.config.collection_path())
    }

    /// Loads the collection, applies `update`, and saves it back.
    ///
    /// Nothing is written if `update` fails.
    pub fn update_collection<T, F>(&self, update: F) -> StoreResult<T>
    where
        F: FnOnce(&mut MoneyCollection) -> StoreResult<T>,
    {
        let mut collection = self.load_collection()?;
        let result = update(&mut collection)?;
        self.save_collection(&collection)?;
        Ok(result)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Picks the target path and makes sure its directory exists.
    fn resolve(
        &self,
        explicit: Option<&Path>,
        default: fn(&StoreConfig) -> PathBuf,
    ) -> StoreResult<PathBuf> {
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default(&self.config));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                debug!(dir = %parent.display(), "Creating data directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(path)
    }
}
