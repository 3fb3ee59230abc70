//! `load`: report the shape and column names of a dataset

use super::{Notice, Outcome};
use crate::system::System;
use crate::table::read_csv;
use anyhow::Result;
use core::fmt;
use std::path::Path;

/// Shape and columns of a loaded dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    pub columns: Vec<String>,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shape: ({}, {})", self.rows, self.columns.len())?;
        write!(f, "Columns: {:?}", self.columns)
    }
}

/// Load the dataset at `path` and describe it
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_dataset(system: &dyn System, path: &Path) -> Result<Outcome<LoadReport>> {
    if !system.is_file(path) {
        return Ok(Outcome::Stopped(Notice::FileNotFound(path.to_path_buf())));
    }

    let table = read_csv(system, path)?;
    let (rows, _) = table.shape();

    Ok(Outcome::Completed(LoadReport {
        rows,
        columns: table.column_names(),
    }))
}
