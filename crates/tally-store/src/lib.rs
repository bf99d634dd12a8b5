//! # tally-store: File Layer for Tally
//!
//! This crate persists [`tally_core::Money`] values and collections as small
//! JSON files, and owns the store configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Data Flow                                  │
//! │                                                                         │
//! │  tally CLI (save / load / collection ...)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  MoneyStore   │    │     file      │    │    codec     │  │   │
//! │  │   │  (store.rs)   │───►│  open / close │───►│  JSON <-> Rec │  │   │
//! │  │   │  StoreConfig  │    │  Persist      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  money.json        { "amount": 1500.00, "currency": "USD" }      │   │
//! │  │  collection.json   [ {...}, {...} ]                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`codec`] - JSON encoding over any reader / writer
//! - [`file`] - Scoped file save / load and the [`Persist`] trait
//! - [`store`] - Config-driven [`MoneyStore`]
//! - [`config`] - [`StoreConfig`] (TOML file + environment)
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use codec::JsonStyle;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use file::Persist;
pub use store::MoneyStore;
