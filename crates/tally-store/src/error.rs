//! # Store Error Types
//!
//! Error types for file and config operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error ─────┐                                                  │
//! │  serde_json::Error ──┼──► StoreError (this module)                      │
//! │  MoneyError ─────────┤        │                                         │
//! │  toml errors ────────┘        ▼                                         │
//! │                          CLI reports on stderr                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tally_core::MoneyError;
use thiserror::Error;

/// File store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying file failed.
    ///
    /// ## When This Occurs
    /// - File or directory doesn't exist
    /// - Permission denied
    /// - Disk full
    #[error("IO failure: {0}")]
    Io(#[from] std::io::Error),

    /// File contents are not valid JSON of the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(String),

    /// The record decoded but is not a valid Money value.
    ///
    /// ## When This Occurs
    /// - `amount` or `currency` missing (MalformedRecord)
    /// - Negative amount or bad currency code in a hand-edited file
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoad(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSave(String),

    /// Config values are unusable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// Returns true if the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(err) if err.kind() == std::io::ErrorKind::NotFound)
    }

    /// Returns true if the file exists but holds a bad record.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            StoreError::Json(_) | StoreError::Money(MoneyError::MalformedRecord { .. })
        )
    }
}

/// Convert serde_json errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// Category::Io                      → StoreError::Io
/// Category::Syntax / Data / Eof     → StoreError::Json
/// ```
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            StoreError::Io(err.into())
        } else {
            StoreError::Json(err.to_string())
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoad(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSave(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
