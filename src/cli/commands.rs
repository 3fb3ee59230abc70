//! CLI command implementations
//!
//! Turns parsed arguments into operation inputs, filling unset paths from
//! the resolved configuration, and prints each outcome.

use crate::cli::{CleanArgs, Cli, Command, FilterArgs, SummaryFormat};
use crate::config::ExplorerConfig;
use crate::operations::{
    CleanMode, CleanOptions, FilterOptions, Outcome, clean_dataset, filter_dataset, load_dataset,
    summarize_dataset,
};
use crate::system::System;
use crate::utils::path::expand_tilde;
use anyhow::{Context as _, Result};
use core::fmt::Display;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Execute the parsed command against `system`, writing results to `out`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the dataset cannot be
/// read or parsed, or the output cannot be written.
pub fn execute(cli: &Cli, system: &dyn System, out: &mut dyn Write) -> Result<()> {
    let config = ExplorerConfig::resolve(system, cli.config.as_deref())?;
    debug!("Resolved configuration: {config:?}");

    match &cli.command {
        Command::Load(args) => {
            let input = input_path(args.file.as_deref(), &config);
            emit(out, load_dataset(system, &input)?)
        }
        Command::Summary(args) => {
            let input = input_path(args.file.as_deref(), &config);
            match summarize_dataset(system, &input)? {
                Outcome::Completed(report) => match args.format {
                    SummaryFormat::Table => print_line(out, &report),
                    SummaryFormat::Json => print_line(out, &report.to_json()?),
                },
                Outcome::Stopped(notice) => print_line(out, &notice),
            }
        }
        Command::Clean(args) => emit(out, clean_dataset(system, &clean_options(args, &config))?),
        Command::Filter(args) => {
            emit(out, filter_dataset(system, &filter_options(args, &config))?)
        }
    }
}

fn input_path(file: Option<&str>, config: &ExplorerConfig) -> PathBuf {
    file.map_or_else(|| config.input_path(), expand_tilde)
}

fn clean_options(args: &CleanArgs, config: &ExplorerConfig) -> CleanOptions {
    CleanOptions {
        input: input_path(args.file.as_deref(), config),
        output: args
            .output
            .as_deref()
            .map_or_else(|| config.clean_output_path(), expand_tilde),
        mode: CleanMode::from_flags(args.dropna, args.fillna),
    }
}

fn filter_options(args: &FilterArgs, config: &ExplorerConfig) -> FilterOptions {
    FilterOptions {
        input: input_path(args.file.as_deref(), config),
        output: args
            .output
            .as_deref()
            .map_or_else(|| config.filter_output_path(), expand_tilde),
        column: args.column.clone(),
        min: args.min,
        max: args.max,
    }
}

fn emit<T: Display>(out: &mut dyn Write, outcome: Outcome<T>) -> Result<()> {
    match outcome {
        Outcome::Completed(report) => print_line(out, &report),
        Outcome::Stopped(notice) => print_line(out, &notice),
    }
}

fn print_line(out: &mut dyn Write, value: &dyn Display) -> Result<()> {
    writeln!(out, "{value}").context("Failed to write to stdout")
}
