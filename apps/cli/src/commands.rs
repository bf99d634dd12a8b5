//! Command execution.
//!
//! Pure commands only touch tally-core; `save`, `load` and `collection`
//! go through a [`MoneyStore`] built from the loaded config.

use std::cmp::Ordering;
use std::io::Write;

use anyhow::{Context, Result};
use tally_store::{MoneyStore, StoreConfig};
use tracing::debug;

use crate::cli::{Cli, CollectionCommand, Command};

/// Runs one parsed command, writing its output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    debug!(command = ?cli.command, "Running command");

    match cli.command {
        Command::Show { money } => {
            writeln!(out, "{money}")?;
            writeln!(out, "{}", money.formatted())?;
        }

        Command::Add { a, b } => {
            writeln!(out, "{}", a.checked_add(&b)?)?;
        }

        Command::Sub { a, b } => {
            writeln!(out, "{}", a.checked_sub(&b)?)?;
        }

        Command::Compare { a, b } => {
            let symbol = match a.try_cmp(&b)? {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            writeln!(out, "{a} {symbol} {b}")?;
        }

        Command::Interest { money, percent } => {
            writeln!(out, "{}", money.apply_interest(percent)?)?;
        }

        Command::Convert {
            money,
            currency,
            rate,
        } => {
            writeln!(out, "{}", money.convert_to(&currency, rate)?)?;
        }

        Command::Split { money, parts } => {
            for share in money.split(parts)? {
                writeln!(out, "{share}")?;
            }
        }

        Command::Save { money, file } => {
            let store = open_store(cli.config)?;
            let path = store
                .save_money_to(&money, file.as_deref())
                .context("saving money")?;
            writeln!(out, "Saved {money} to {}", path.display())?;
        }

        Command::Load { file } => {
            let store = open_store(cli.config)?;
            let money = store
                .load_money_from(file.as_deref())
                .context("loading money")?;
            writeln!(out, "{money}")?;
        }

        Command::Collection(command) => {
            let store = open_store(cli.config)?;
            run_collection(&store, command, out)?;
        }
    }

    Ok(())
}

fn run_collection<W: Write>(store: &MoneyStore, command: CollectionCommand, out: &mut W) -> Result<()> {
    match command {
        CollectionCommand::Add { money } => {
            let count = store
                .update_collection(|c| {
                    c.push(money.clone());
                    Ok(c.len())
                })
                .context("updating collection")?;
            writeln!(out, "Added {money} ({count} items)")?;
        }

        CollectionCommand::List => {
            let collection = store.load_collection().context("loading collection")?;
            for (i, money) in collection.iter().enumerate() {
                writeln!(out, "{i}: {money}")?;
            }
            writeln!(out, "{} items", collection.len())?;
        }

        CollectionCommand::Remove { index } => {
            let removed = store
                .update_collection(|c| Ok(c.remove(index)?))
                .context("updating collection")?;
            writeln!(out, "Removed {removed}")?;
        }
    }

    Ok(())
}

fn open_store(config_path: Option<std::path::PathBuf>) -> Result<MoneyStore> {
    let config = StoreConfig::load(config_path).context("loading config")?;
    Ok(MoneyStore::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;
    use tally_core::MoneyError;
    use tempfile::TempDir;

    fn exec(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("tally").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Writes a tally.toml pointing at a scratch data dir.
    fn config_in(dir: &Path) -> String {
        let path = dir.join("tally.toml");
        let data_dir = dir.join("data");
        std::fs::write(
            &path,
            format!("data_dir = {:?}\n", data_dir.to_string_lossy()),
        )
        .unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_show() {
        assert_eq!(exec(&["show", "1500 usd"]).unwrap(), "1500.00 USD\nUSD 1,500.00\n");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(exec(&["add", "100.50 USD", "200.75 USD"]).unwrap(), "301.25 USD\n");
        assert_eq!(exec(&["sub", "10 USD", "2.5 USD"]).unwrap(), "7.50 USD\n");
        assert_eq!(exec(&["interest", "100 USD", "10"]).unwrap(), "110.00 USD\n");
        assert_eq!(exec(&["interest", "100 USD", "-25"]).unwrap(), "75.00 USD\n");
        assert_eq!(exec(&["convert", "100 USD", "eur", "0.9"]).unwrap(), "90.00 EUR\n");
        assert_eq!(
            exec(&["split", "100 USD", "3"]).unwrap(),
            "33.33 USD\n33.33 USD\n33.34 USD\n"
        );
        assert_eq!(exec(&["compare", "5 USD", "7 USD"]).unwrap(), "5.00 USD < 7.00 USD\n");
    }

    #[test]
    fn test_currency_mismatch_is_reported() {
        let err = exec(&["add", "100.50 USD", "200.75 EUR"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoneyError>(),
            Some(&MoneyError::mismatch("USD", "EUR"))
        );
    }

    #[test]
    fn test_split_rejects_negative_parts() {
        let err = exec(&["split", "100 USD", "-1"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoneyError>(),
            Some(&MoneyError::InvalidPartCount { parts: -1 })
        );
    }

    #[test]
    fn test_bad_money_argument_fails_to_parse() {
        assert!(exec(&["show", "USD 1,500.00"]).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());

        let saved = exec(&["--config", &config, "save", "1500 USD"]).unwrap();
        assert!(saved.starts_with("Saved 1500.00 USD to "));

        assert_eq!(exec(&["--config", &config, "load"]).unwrap(), "1500.00 USD\n");
    }

    #[test]
    fn test_collection_workflow() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());

        exec(&["--config", &config, "collection", "add", "100 USD"]).unwrap();
        let added = exec(&["--config", &config, "collection", "add", "200.50 EUR"]).unwrap();
        assert_eq!(added, "Added 200.50 EUR (2 items)\n");

        assert_eq!(
            exec(&["--config", &config, "collection", "list"]).unwrap(),
            "0: 100.00 USD\n1: 200.50 EUR\n2 items\n"
        );

        assert_eq!(
            exec(&["--config", &config, "collection", "remove", "0"]).unwrap(),
            "Removed 100.00 USD\n"
        );
        assert!(exec(&["--config", &config, "collection", "remove", "3"]).is_err());
        assert_eq!(
            exec(&["--config", &config, "collection", "list"]).unwrap(),
            "0: 200.50 EUR\n1 items\n"
        );
    }
}
