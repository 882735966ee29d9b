//! Command-line arguments for the scouting sheet client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};
use scout_common::net::{DEFAULT_TIMEOUT_SECS, SCOUTER_LOOKUP_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Function to evaluate.
    #[command(subcommand)]
    pub command: Command,
}

/// The sheet functions, one per subcommand.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up who scouted a match position.
    Scouter {
        /// Match number, as it would appear in a cell.
        #[clap(long = "match", allow_hyphen_values = true)]
        match_number: String,

        /// Alliance color (red or blue, any case).
        #[clap(long, allow_hyphen_values = true)]
        color: String,

        /// Driverstation within the alliance (1-3).
        #[clap(long, allow_hyphen_values = true)]
        driver_station: String,

        /// Lookup endpoint.
        #[clap(long, env = "SCOUT_ENDPOINT", default_value = SCOUTER_LOOKUP_URL)]
        endpoint: String,

        /// Seconds to wait for the endpoint before giving up.
        #[clap(long, env = "SCOUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },

    /// Print a random motivational quote.
    Quote {
        /// Ignored. Accepted so a sheet can pass the range it wants to refresh on.
        anything: Vec<String>,

        /// Seed the generator for a reproducible pick.
        #[clap(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scouter() {
        let args = Args::try_parse_from([
            "scout_client",
            "scouter",
            "--match",
            "-3",
            "--color",
            "Blue",
            "--driver-station",
            "2",
        ])
        .unwrap();
        match args.command {
            Command::Scouter {
                match_number,
                color,
                driver_station,
                timeout_secs,
                ..
            } => {
                assert_eq!(match_number, "-3");
                assert_eq!(color, "Blue");
                assert_eq!(driver_station, "2");
                assert!(timeout_secs > 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_quote_with_ignored_args() {
        let args =
            Args::try_parse_from(["scout_client", "quote", "B2", "B3", "--seed", "4"]).unwrap();
        match args.command {
            Command::Quote { anything, seed } => {
                assert_eq!(anything, vec!["B2", "B3"]);
                assert_eq!(seed, Some(4));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn scouter_requires_all_cells() {
        assert!(Args::try_parse_from(["scout_client", "scouter", "--match", "1"]).is_err());
    }
}
