//! Operations module
//!
//! One module per command. Every operation checks its preconditions, loads
//! the dataset, transforms or aggregates it, and returns an [`Outcome`]
//! describing what happened. Nothing is written when an operation stops
//! early.

pub mod clean;
pub mod filter;
pub mod load;
pub mod summary;

pub use clean::{CleanMode, CleanOptions, CleanReport, clean_dataset};
pub use filter::{FilterOptions, FilterReport, filter_dataset};
pub use load::{LoadReport, load_dataset};
pub use summary::{SummaryReport, summarize_dataset};

use core::fmt;
use std::path::PathBuf;

/// Reason an operation stopped before producing a result
///
/// These are user-facing conditions rather than failures: the message is
/// printed and the process still exits successfully.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Notice {
    /// The input dataset does not exist
    FileNotFound(PathBuf),
    /// The dataset has no numeric column to summarize
    NoNumericColumns,
    /// Neither `--dropna` nor `--fillna` was given
    NoCleaningMode,
    /// The filter column is not in the dataset
    ColumnNotFound(String),
    /// A bound was given for a column that is not numeric
    ColumnNotNumeric(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Self::NoNumericColumns => f.write_str("No numeric columns found in dataset."),
            Self::NoCleaningMode => {
                f.write_str("Please specify either --dropna or --fillna <VALUE>.")
            }
            Self::ColumnNotFound(name) => write!(f, "Column '{name}' not found in dataset."),
            Self::ColumnNotNumeric(name) => write!(f, "Column '{name}' is not numeric."),
        }
    }
}

/// Result of running an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation ran to completion
    Completed(T),
    /// The operation stopped early without side effects
    Stopped(Notice),
}

impl<T> Outcome<T> {
    /// The report, if the operation completed
    #[must_use]
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Stopped(_) => None,
        }
    }

    /// The notice, if the operation stopped early
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Completed(_) => None,
            Self::Stopped(notice) => Some(notice),
        }
    }
}
