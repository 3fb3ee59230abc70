//! `filter`: keep rows whose value in one column lies in an inclusive range

use super::{Notice, Outcome};
use crate::system::System;
use crate::table::{read_csv, write_csv};
use anyhow::Result;
use core::fmt;
use std::path::PathBuf;
use tracing::info;

/// Inputs of a filter run
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub column: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FilterOptions {
    const fn has_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Check a value against both bounds; bounds are inclusive
    fn accepts(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// What a filter run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub output: PathBuf,
    pub rows: usize,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Filtered data saved to {} ({} rows)",
            self.output.display(),
            self.rows
        )
    }
}

/// Select rows by range on one column and write the result
///
/// Without bounds every row is kept. Missing values never satisfy a bound.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be written.
pub fn filter_dataset(
    system: &dyn System,
    options: &FilterOptions,
) -> Result<Outcome<FilterReport>> {
    if !system.is_file(&options.input) {
        return Ok(Outcome::Stopped(Notice::FileNotFound(options.input.clone())));
    }

    let mut table = read_csv(system, &options.input)?;

    let Some(column) = table.column(&options.column) else {
        return Ok(Outcome::Stopped(Notice::ColumnNotFound(options.column.clone())));
    };

    if options.has_bounds() {
        if !column.is_numeric() {
            return Ok(Outcome::Stopped(Notice::ColumnNotNumeric(
                options.column.clone(),
            )));
        }

        let values = column.numeric_values();
        let before = table.row_count();
        table.retain_rows(|index| {
            values
                .get(index)
                .copied()
                .flatten()
                .is_some_and(|value| options.accepts(value))
        });
        info!(
            "Kept {} of {before} rows for {} in [{}, {}]",
            table.row_count(),
            options.column,
            options.min.map_or_else(|| "-inf".to_owned(), |min| min.to_string()),
            options.max.map_or_else(|| "inf".to_owned(), |max| max.to_string()),
        );
    }

    write_csv(system, &table, &options.output)?;

    Ok(Outcome::Completed(FilterReport {
        output: options.output.clone(),
        rows: table.row_count(),
    }))
}
