//! # Store Configuration
//!
//! Where Tally keeps its files, and how it writes them.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TALLY_DATA_DIR=/srv/tally                                          │
//! │     TALLY_MONEY_FILE=money.json                                        │
//! │     TALLY_COLLECTION_FILE=collection.json                              │
//! │     TALLY_PRETTY=true                                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tally.tally/tally.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     platform data dir, money.json, collection.json, compact JSON       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tally.toml
//! data_dir = "/home/me/.local/share/tally"
//! money_file = "money.json"
//! collection_file = "collection.json"
//! pretty = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::codec::JsonStyle;
use crate::error::{StoreError, StoreResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "tally.toml";

// =============================================================================
// Store Configuration
// =============================================================================

/// File locations and output style for the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name for the single saved money value.
    #[serde(default = "default_money_file")]
    pub money_file: String,

    /// File name for the saved collection.
    #[serde(default = "default_collection_file")]
    pub collection_file: String,

    /// Write indented JSON.
    #[serde(default)]
    pub pretty: bool,
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "tally", "tally")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_money_file() -> String {
    "money.json".to_string()
}

fn default_collection_file() -> String {
    "collection.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: default_data_dir(),
            money_file: default_money_file(),
            collection_file: default_collection_file(),
            pretty: false,
        }
    }
}

impl StoreConfig {
    /// Default config rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (tally.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| StoreError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSave("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Store config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.money_file.trim().is_empty() {
            return Err(StoreError::InvalidConfig("money_file must not be empty".into()));
        }
        if self.collection_file.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "collection_file must not be empty".into(),
            ));
        }
        if self.money_file == self.collection_file {
            return Err(StoreError::InvalidConfig(
                "money_file and collection_file must differ".into(),
            ));
        }
        Ok(())
    }

    /// Applies `TALLY_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TALLY_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(file) = lookup("TALLY_MONEY_FILE") {
            self.money_file = file;
        }

        if let Some(file) = lookup("TALLY_COLLECTION_FILE") {
            self.collection_file = file;
        }

        if let Some(pretty) = lookup("TALLY_PRETTY") {
            match pretty.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.pretty = true,
                "0" | "false" | "no" | "off" => self.pretty = false,
                _ => warn!(value = %pretty, "Unknown TALLY_PRETTY value in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Full path of the single-value file.
    pub fn money_path(&self) -> PathBuf {
        self.data_dir.join(&self.money_file)
    }

    /// Full path of the collection file.
    pub fn collection_path(&self) -> PathBuf {
        self.data_dir.join(&self.collection_file)
    }

    pub fn json_style(&self) -> JsonStyle {
        JsonStyle::from_pretty(self.pretty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.money_file, "money.json");
        assert_eq!(config.collection_file, "collection.json");
        assert!(!config.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_paths() {
        let config = StoreConfig::with_data_dir("/tmp/tally");
        assert_eq!(config.money_path(), PathBuf::from("/tmp/tally/money.json"));
        assert_eq!(
            config.collection_path(),
            PathBuf::from("/tmp/tally/collection.json")
        );
        assert_eq!(config.json_style(), JsonStyle::Compact);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str(
            r#"
            data_dir = "/data"
            pretty = true
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/data"));
        assert!(config.pretty);
        assert_eq!(config.money_file, "money.json");
    }

    #[test]
    fn test_validation() {
        let mut config = StoreConfig::with_data_dir(".");
        config.money_file = "  ".into();
        assert!(matches!(config.validate(), Err(StoreError::InvalidConfig(_))));

        let mut config = StoreConfig::with_data_dir(".");
        config.collection_file = config.money_file.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("TALLY_DATA_DIR", "/override"),
            ("TALLY_MONEY_FILE", "m.json"),
            ("TALLY_PRETTY", "yes"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::with_data_dir("/original");
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/override"));
        assert_eq!(config.money_file, "m.json");
        assert_eq!(config.collection_file, "collection.json");
        assert!(config.pretty);
    }

    #[test]
    fn test_unknown_pretty_value_is_ignored() {
        let mut config = StoreConfig::with_data_dir(".");
        config.pretty = true;
        config.apply_overrides(|key| (key == "TALLY_PRETTY").then(|| "maybe".to_string()));
        assert!(config.pretty);
    }

    #[test]
    fn test_save_then_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = StoreConfig::with_data_dir(dir.path());
        config.collection_file = "wallet.json".into();
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: StoreConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "pretty = \"not a bool\"").unwrap();

        assert!(matches!(
            StoreConfig::load(Some(path)),
            Err(StoreError::ConfigLoad(_))
        ));
    }
}
