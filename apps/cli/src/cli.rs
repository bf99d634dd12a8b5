//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tally_core::Money;

/// Currency-aware money arithmetic.
///
/// Amounts are written as "<amount> <currency>", e.g. "100.50 USD".
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// Path to tally.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a value in display and human-readable form
    Show { money: Money },

    /// Add two values of the same currency
    Add { a: Money, b: Money },

    /// Subtract B from A (same currency, result must not be negative)
    Sub { a: Money, b: Money },

    /// Compare two values of the same currency
    Compare { a: Money, b: Money },

    /// Apply a percentage: amount * (1 + percent / 100)
    Interest {
        money: Money,
        #[arg(allow_negative_numbers = true)]
        percent: Decimal,
    },

    /// Convert using a caller-supplied rate (target units per source unit)
    Convert {
        money: Money,
        currency: String,
        #[arg(allow_negative_numbers = true)]
        rate: Decimal,
    },

    /// Split into equal shares; the last share takes the remainder
    Split {
        money: Money,
        #[arg(allow_negative_numbers = true)]
        parts: i64,
    },

    /// Save a value to the money file
    Save {
        money: Money,
        /// Write here instead of the configured money file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Load the saved value
    Load {
        /// Read from here instead of the configured money file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Work with the saved collection
    #[command(subcommand)]
    Collection(CollectionCommand),
}

#[derive(Debug, Subcommand)]
pub enum CollectionCommand {
    /// Append a value
    Add { money: Money },

    /// Print every value, one per line
    List,

    /// Remove the value at INDEX (0-based)
    Remove { index: usize },
}
