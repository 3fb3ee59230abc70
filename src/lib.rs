//! `csv-explorer` - A CLI tool for inspecting and lightly cleaning CSV datasets
//!
//! Four one-shot commands operate on a CSV file with a header row:
//! `load` reports its shape, `summary` prints per-column statistics,
//! `clean` drops or fills missing values, and `filter` keeps rows within a
//! numeric range. Mutating commands write a new CSV file and never modify
//! the input.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;
pub mod table;
pub mod utils;

use anyhow::Result;
use cli::Cli;
use system::RealSystem;

/// Main entry point for the csv-explorer library
pub fn run(args: &Cli) -> Result<()> {
    let system = RealSystem;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(args, &system, &mut out)
}
