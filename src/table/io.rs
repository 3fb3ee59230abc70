//! CSV reading and writing
//!
//! Input is read in full and parsed from memory; output is serialized into
//! a buffer and handed to the filesystem in a single write.

use super::Table;
use super::infer::is_missing_token;
use crate::error::ExplorerError;
use crate::system::System;
use crate::utils::fs::create_parent_directories;
use anyhow::{Context as _, Result, anyhow};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read and parse a CSV file into a [`Table`]
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read (`Filesystem`)
/// - The file is not valid UTF-8 or is not well-formed CSV (`Data`)
pub fn read_csv(system: &dyn System, path: &Path) -> Result<Table> {
    let content = system.read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::InvalidData {
            ExplorerError::data(format!(
                "File is not valid UTF-8: {}",
                path.display()
            ))
        } else {
            ExplorerError::filesystem(format!(
                "Failed to read {}: {err}",
                path.display()
            ))
        }
    })?;

    let table = parse_csv(&content)
        .with_context(|| format!("Failed to load dataset: {}", path.display()))?;

    debug!(
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Parse CSV text with a header row into a [`Table`]
///
/// Blank lines are skipped. Every record must have as many fields as the
/// header.
///
/// # Errors
///
/// Returns a `Data` error if the header is empty or a record is malformed.
pub fn parse_csv(content: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| ExplorerError::data(format!("Failed to read CSV header: {err}")))?
        .iter()
        .map(str::to_owned)
        .collect();

    if headers.is_empty() {
        return Err(ExplorerError::data("No columns to parse from file").into());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|err| ExplorerError::data(format!("Failed to parse CSV: {err}")))?;
        rows.push(
            record
                .iter()
                .map(|field| (!is_missing_token(field)).then(|| field.to_owned()))
                .collect(),
        );
    }

    Ok(Table::from_rows(headers, rows))
}

/// Serialize a table as CSV with a header row and no index column
///
/// Missing cells are written as empty fields.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(table.column_names())
        .context("Failed to write CSV header")?;

    for index in 0..table.row_count() {
        let row = table.row(index);
        writer
            .write_record(row.iter().map(|cell| cell.unwrap_or("")))
            .with_context(|| format!("Failed to write CSV row {index}"))?;
    }

    writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush CSV output: {}", err.error()))
}

/// Write a table to `path` as CSV, creating parent directories as needed
///
/// # Errors
///
/// Returns a `Filesystem` error if the output cannot be written.
pub fn write_csv(system: &dyn System, table: &Table, path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(table)?;

    create_parent_directories(system, path).map_err(|err| {
        ExplorerError::filesystem(format!("{err:#}"))
    })?;

    system.write(path, &bytes).map_err(|err| {
        ExplorerError::filesystem(format!("Failed to write {}: {err}", path.display()))
    })?;

    debug!("Wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn round_trip_preserves_cell_text() {
        let input = "name,score,note\nalice,1.50,\"hello, world\"\nbob,NA,plain\n";
        let table = parse_csv(input).unwrap();
        let output = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert_eq!(
            output,
            "name,score,note\nalice,1.50,\"hello, world\"\nbob,,plain\n"
        );
    }

    #[test]
    fn header_only_file_has_zero_rows() {
        let table = parse_csv("a,b\n").unwrap();
        assert_eq!(table.shape(), (0, 2));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = parse_csv("a\n1\n\n2\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn ragged_rows_are_data_errors() {
        let err = parse_csv("a,b\n1,2,3\n").unwrap_err();
        let explorer = err.downcast_ref::<ExplorerError>().unwrap();
        assert_eq!(explorer.exit_code(), 3);
    }

    #[test]
    fn empty_input_is_data_error() {
        let err = parse_csv("").unwrap_err();
        assert!(err.to_string().contains("No columns"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let system = MockSystem::new();
        let table = parse_csv("a\n1\n").unwrap();
        let path = Path::new("/out/nested/result.csv");

        write_csv(&system, &table, path).unwrap();

        assert_eq!(system.read_to_string(path).unwrap(), "a\n1\n");
        assert_eq!(system.write_count().unwrap(), 1);
    }

    #[test]
    fn read_reports_invalid_utf8_as_data_error() {
        let system = MockSystem::new()
            .with_file("/data/bad.csv", &[0x61, 0x0a, 0xff, 0xfe])
            .unwrap();
        let err = read_csv(&system, Path::new("/data/bad.csv")).unwrap_err();
        assert_eq!(err.downcast_ref::<ExplorerError>().unwrap().exit_code(), 3);
    }
}
