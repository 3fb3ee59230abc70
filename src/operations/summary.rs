//! `summary`: mean, median and standard deviation of numeric columns

use super::{Notice, Outcome};
use crate::system::System;
use crate::table::{ColumnStats, read_csv};
use anyhow::{Context as _, Result};
use core::fmt;
use std::path::Path;
use tracing::debug;

const HEADER: [&str; 4] = ["column", "mean", "median", "std"];

/// Statistics for every numeric column, in dataset order
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub stats: Vec<ColumnStats>,
}

impl SummaryReport {
    /// Render the statistics as a JSON array
    ///
    /// Non-finite values (a NaN standard deviation, for example) become `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.stats).context("Failed to serialize summary")
    }
}

fn format_stat(value: f64) -> String {
    format!("{value:.6}")
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String; 4], widths: &[usize; 4]) -> fmt::Result {
    for (index, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if index > 0 {
            f.write_str("  ")?;
        }
        write!(f, "{cell:>width$}")?;
    }
    Ok(())
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = HEADER.map(str::to_owned);
        let rows: Vec<[String; 4]> = self
            .stats
            .iter()
            .map(|stats| {
                [
                    stats.column.clone(),
                    format_stat(stats.mean),
                    format_stat(stats.median),
                    format_stat(stats.std),
                ]
            })
            .collect();

        let mut widths = HEADER.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, &header, &widths)?;
        for row in &rows {
            f.write_str("\n")?;
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Compute per-column statistics for the numeric columns of a dataset
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn summarize_dataset(system: &dyn System, path: &Path) -> Result<Outcome<SummaryReport>> {
    if !system.is_file(path) {
        return Ok(Outcome::Stopped(Notice::FileNotFound(path.to_path_buf())));
    }

    let table = read_csv(system, path)?;
    let stats: Vec<ColumnStats> = table.numeric_columns().map(ColumnStats::from_column).collect();

    if stats.is_empty() {
        return Ok(Outcome::Stopped(Notice::NoNumericColumns));
    }

    debug!("Summarized {} numeric columns", stats.len());
    Ok(Outcome::Completed(SummaryReport { stats }))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    fn summarize(content: &[u8]) -> Outcome<SummaryReport> {
        let system = MockSystem::new().with_file("/d.csv", content).unwrap();
        summarize_dataset(&system, Path::new("/d.csv")).unwrap()
    }

    #[test]
    fn only_numeric_columns_in_order() {
        let report = summarize(b"b,name,a\n1,x,10\n2,y,\n3,z,30\n")
            .completed()
            .unwrap();
        let names: Vec<&str> = report.stats.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!((report.stats[0].mean - 2.0).abs() < 1e-12);
        assert!((report.stats[1].mean - 20.0).abs() < 1e-12);
        assert!((report.stats[1].median - 20.0).abs() < 1e-12);
    }

    #[test]
    fn renders_aligned_table() {
        let report = summarize(b"x\n1\n2\n3\n4\n").completed().unwrap();
        assert_eq!(
            report.to_string(),
            "column      mean    median       std\n     x  2.500000  2.500000  1.290994"
        );
    }

    #[test]
    fn single_value_std_is_nan() {
        let report = summarize(b"x,y\n5,\n").completed().unwrap();
        assert!(report.stats[0].std.is_nan());
        let rendered = report.to_string();
        assert!(rendered.contains("NaN"));
        // All-missing column is still numeric
        assert_eq!(report.stats[1].column, "y");
        assert!(report.stats[1].mean.is_nan());
    }

    #[test]
    fn json_uses_null_for_nan() {
        let report = summarize(b"x\n5\n").completed().unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value[0]["column"], "x");
        assert_eq!(value[0]["mean"], 5.0);
        assert!(value[0]["std"].is_null());
    }

    #[test]
    fn text_only_dataset_has_no_numeric_columns() {
        let outcome = summarize(b"name,city\nann,paris\n");
        assert_eq!(outcome.notice(), Some(&Notice::NoNumericColumns));
    }

    #[test]
    fn header_only_dataset_has_no_numeric_columns() {
        let outcome = summarize(b"a,b\n");
        assert_eq!(outcome.notice(), Some(&Notice::NoNumericColumns));
    }

    #[test]
    fn padded_numbers_are_summarized() {
        let report = summarize(b"x\n 1\n3 \n").completed().unwrap();
        assert!((report.stats[0].mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_file_is_a_notice() {
        let system = MockSystem::new();
        let outcome = summarize_dataset(&system, Path::new("/nope.csv")).unwrap();
        assert!(matches!(outcome.notice(), Some(Notice::FileNotFound(_))));
    }
}
