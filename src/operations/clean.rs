//! `clean`: drop or fill missing values and save the result

use super::{Notice, Outcome};
use crate::system::System;
use crate::table::{read_csv, write_csv};
use anyhow::Result;
use core::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How missing values are resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CleanMode {
    /// Remove every row that has a missing cell
    DropMissing,
    /// Replace missing cells of numeric columns with the value
    Fill(f64),
}

impl CleanMode {
    /// Build the mode from the `--dropna` / `--fillna` pair
    ///
    /// `None` when neither was given. When both are given, dropping wins;
    /// the command line rejects that combination before it gets here.
    #[must_use]
    pub fn from_flags(dropna: bool, fillna: Option<f64>) -> Option<Self> {
        if dropna {
            return Some(Self::DropMissing);
        }
        fillna.map(Self::Fill)
    }
}

/// Inputs of a clean run
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Option<CleanMode>,
}

/// What a clean run did
#[derive(Debug, Clone, PartialEq)]
pub struct CleanReport {
    pub mode: CleanMode,
    pub output: PathBuf,
    /// Rows removed in drop mode
    pub rows_removed: usize,
    /// Cells filled in fill mode
    pub cells_filled: usize,
    /// Data rows in the written file
    pub rows_written: usize,
}

impl fmt::Display for CleanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            CleanMode::DropMissing => write!(
                f,
                "Dropped rows with missing values. Saved to {}",
                self.output.display()
            ),
            CleanMode::Fill(value) => write!(
                f,
                "Filled missing values with {value}. Saved to {}",
                self.output.display()
            ),
        }
    }
}

/// Resolve missing values in the input dataset and write the result
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be written.
pub fn clean_dataset(system: &dyn System, options: &CleanOptions) -> Result<Outcome<CleanReport>> {
    let input: &Path = &options.input;
    if !system.is_file(input) {
        return Ok(Outcome::Stopped(Notice::FileNotFound(input.to_path_buf())));
    }

    let Some(mode) = options.mode else {
        return Ok(Outcome::Stopped(Notice::NoCleaningMode));
    };

    let mut table = read_csv(system, input)?;

    let mut rows_removed = 0;
    let mut cells_filled = 0;
    match mode {
        CleanMode::DropMissing => {
            rows_removed = table.drop_missing_rows();
            info!("Removed {rows_removed} rows with missing values");
        }
        CleanMode::Fill(value) => {
            let outcome = table.fill_missing_numeric(value);
            cells_filled = outcome.filled;
            info!("Filled {} missing cells with {value}", outcome.filled);
            if outcome.skipped > 0 {
                warn!(
                    "Left {} missing cells unfilled",
                    outcome.skipped
                );
            }
        }
    }

    write_csv(system, &table, &options.output)?;

    Ok(Outcome::Completed(CleanReport {
        mode,
        output: options.output.clone(),
        rows_removed,
        cells_filled,
        rows_written: table.row_count(),
    }))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::table::parse_csv;
    use crate::system::MockSystem;

    fn options(mode: Option<CleanMode>) -> CleanOptions {
        CleanOptions {
            input: PathBuf::from("/data/in.csv"),
            output: PathBuf::from("/data/out.csv"),
            mode,
        }
    }

    #[test]
    fn drop_mode_keeps_complete_rows() {
        let system = MockSystem::new()
            .with_file("/data/in.csv", b"a,b\n1,2\n,4\n5,\n")
            .unwrap();
        let report = clean_dataset(&system, &options(Some(CleanMode::DropMissing)))
            .unwrap()
            .completed()
            .unwrap();

        assert_eq!(system.read_to_string(Path::new("/data/out.csv")).unwrap(), "a,b\n1,2\n");
        assert_eq!(report.rows_removed, 2);
        assert_eq!(report.rows_written, 1);
        assert_eq!(
            report.to_string(),
            "Dropped rows with missing values. Saved to /data/out.csv"
        );
    }

    #[test]
    fn drop_mode_output_has_no_missing_values() {
        let system = MockSystem::new()
            .with_file("/data/in.csv", b"x,y,z\n1,,a\n2,3,b\nNA,4,c\n5,6,\n7,8,d\n")
            .unwrap();
        clean_dataset(&system, &options(Some(CleanMode::DropMissing))).unwrap();

        let output = system.read_to_string(Path::new("/data/out.csv")).unwrap();
        let table = parse_csv(&output).unwrap();
        assert_eq!(table.missing_count(), 0);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn fill_mode_fills_numeric_cells() {
        let system = MockSystem::new()
            .with_file("/data/in.csv", b"a,b,label\n1,,x\n,2.5,\n")
            .unwrap();
        let report = clean_dataset(&system, &options(Some(CleanMode::Fill(0.0))))
            .unwrap()
            .completed()
            .unwrap();

        assert_eq!(
            system.read_to_string(Path::new("/data/out.csv")).unwrap(),
            "a,b,label\n1,0,x\n0,2.5,\n"
        );
        assert_eq!(report.cells_filled, 2);
        assert_eq!(
            report.to_string(),
            "Filled missing values with 0. Saved to /data/out.csv"
        );
    }

    #[test]
    fn fill_mode_is_idempotent() {
        let system = MockSystem::new()
            .with_file("/data/in.csv", b"a,b\n1,\n,2\n3,4\n")
            .unwrap();
        clean_dataset(&system, &options(Some(CleanMode::Fill(-1.5)))).unwrap();
        let first = system.read_to_string(Path::new("/data/out.csv")).unwrap();

        let second_run = CleanOptions {
            input: PathBuf::from("/data/out.csv"),
            output: PathBuf::from("/data/out2.csv"),
            mode: Some(CleanMode::Fill(-1.5)),
        };
        clean_dataset(&system, &second_run).unwrap();
        let second = system.read_to_string(Path::new("/data/out2.csv")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nan_fill_leaves_missing_cells_empty() {
        let system = MockSystem::new()
            .with_file("/data/in.csv", b"a,b\n1,\n,2\n")
            .unwrap();
        let report = clean_dataset(&system, &options(Some(CleanMode::Fill(f64::NAN))))
            .unwrap()
            .completed()
            .unwrap();

        assert_eq!(report.cells_filled, 0);
        assert_eq!(
            system.read_to_string(Path::new("/data/out.csv")).unwrap(),
            "a,b\n1,\n,2\n"
        );
    }

    #[test]
    fn no_mode_writes_nothing() {
        let system = MockSystem::new()
            .with_file("/data/in.csv", b"a\n1\n")
            .unwrap();
        let outcome = clean_dataset(&system, &options(None)).unwrap();

        assert_eq!(outcome.notice(), Some(&Notice::NoCleaningMode));
        assert!(!system.exists(Path::new("/data/out.csv")));
        assert_eq!(system.write_count().unwrap(), 0);
    }

    #[test]
    fn missing_input_writes_nothing() {
        let system = MockSystem::new();
        let outcome = clean_dataset(&system, &options(Some(CleanMode::DropMissing))).unwrap();
        assert!(matches!(outcome.notice(), Some(Notice::FileNotFound(_))));
        assert_eq!(system.write_count().unwrap(), 0);
    }

    #[test]
    fn mode_from_flags() {
        assert_eq!(CleanMode::from_flags(true, None), Some(CleanMode::DropMissing));
        assert_eq!(CleanMode::from_flags(false, Some(2.0)), Some(CleanMode::Fill(2.0)));
        assert_eq!(CleanMode::from_flags(false, None), None);
    }
}
