//! # Tally CLI
//!
//! Thin command-line front end over tally-core and tally-store.
//!
//! ## Usage
//! ```bash
//! tally show "1500 USD"                 # 1500.00 USD / USD 1,500.00
//! tally add "100.50 USD" "200.75 USD"   # 301.25 USD
//! tally split "100 USD" 3               # 33.33 / 33.33 / 33.34
//! tally convert "100 USD" EUR 0.92      # 92.00 EUR
//! tally save "1500 USD" && tally load   # round trip through money.json
//! tally collection add "200.50 EUR"
//! tally collection list
//! ```
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - Default: `warn,tally_store=info`

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match commands::run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging on stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tally_store=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
