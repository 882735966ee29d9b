//! Scout Client — runs the scouting sheet's custom functions from a terminal and
//! prints the value the cell would show to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! scout_client scouter --match 5 --color blue --driver-station 2
//! scout_client quote RawData!B2:B
//! ```
//!
//! Cell arguments are read the way a sheet reads typed input, so `--match 5.5`
//! prints the validation message instead of failing argument parsing. Logs go
//! to stderr; set `RUST_LOG=debug` to see the outbound payload.
#![warn(missing_docs)]
mod args;

use crate::args::{Args, Command};
use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scout_common::net::HttpTransport;
use scout_common::quotes::{motivational_quote, motivational_quote_with};
use scout_common::{CellValue, Result, ScoutError, get_scouter};
use std::time::Duration;

fn main() -> Result<(), ScoutError> {
    init_logger();
    let args = Args::parse();

    let output = match args.command {
        Command::Scouter {
            match_number,
            color,
            driver_station,
            endpoint,
            timeout_secs,
        } => {
            let transport = HttpTransport::new(&endpoint, Duration::from_secs(timeout_secs))?;
            info!("Looking up scouter via {}", transport.endpoint());
            get_scouter(
                &transport,
                &to_cell(&match_number),
                &to_cell(&color),
                &to_cell(&driver_station),
            )
            .inspect_err(|e| error!("Scouter lookup failed: {}", e))?
        }
        Command::Quote { anything, seed } => {
            let quote = match seed {
                Some(seed) => motivational_quote_with(&mut StdRng::seed_from_u64(seed), anything),
                None => motivational_quote(anything),
            };
            quote.to_string()
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Reads a raw argument as a typed cell.
fn to_cell(raw: &str) -> CellValue {
    let Ok(cell) = raw.parse::<CellValue>();
    cell
}
