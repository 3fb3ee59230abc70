//! # `csv-explorer`
//!
//! Exploratory inspection and light cleaning of CSV datasets.
//!
//! ```sh
//! csv-explorer load --file data.csv
//! csv-explorer summary --file data.csv
//! csv-explorer clean --file data.csv --output clean.csv --dropna
//! csv-explorer filter --file data.csv --column price --min 10 --max 20
//! ```
//!
//! Default paths come from `csv-explorer.yaml` when present; see
//! `csv-explorer --help`.

use clap::Parser as _;
use csv_explorer::cli::Cli;
use csv_explorer::error::ExplorerError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = Cli::parse();

    // Results go to stdout; diagnostics go to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match csv_explorer::run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<ExplorerError>()
                    .map_or(1, ExplorerError::exit_code),
            );
        }
    }
}
