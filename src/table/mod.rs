//! In-memory columnar table
//!
//! A [`Table`] holds named columns of raw cell text. Each cell is either
//! present (its original text, kept verbatim so a load/save round trip is
//! lossless) or missing. Every column carries an inferred [`DataType`]
//! that is recomputed whenever the column's cells change.

pub mod infer;
pub mod io;
pub mod stats;

pub use infer::{DataType, is_missing_token, parse_number};
pub use io::{parse_csv, read_csv, to_csv_bytes, write_csv};
pub use stats::{ColumnStats, mean, median, sample_std};

/// A single named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
    dtype: DataType,
}

impl Column {
    /// Build a column and infer its type from the cells
    #[must_use]
    pub fn new<S: Into<String>>(name: S, cells: Vec<Option<String>>) -> Self {
        let dtype = DataType::infer(&cells);
        Self {
            name: name.into(),
            cells,
            dtype,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn dtype(&self) -> DataType {
        self.dtype
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.dtype.is_numeric()
    }

    /// Number of missing cells in this column
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Parsed value of every cell; `None` for missing cells and for text columns
    #[must_use]
    pub fn numeric_values(&self) -> Vec<Option<f64>> {
        if !self.is_numeric() {
            return vec![None; self.cells.len()];
        }
        self.cells
            .iter()
            .map(|cell| cell.as_deref().and_then(parse_number))
            .collect()
    }

    /// Parsed values of the non-missing cells, in row order
    #[must_use]
    pub fn present_values(&self) -> Vec<f64> {
        self.numeric_values().into_iter().flatten().collect()
    }

    /// Replace every missing cell with `text`, returning how many were filled
    fn fill_missing(&mut self, text: &str) -> usize {
        let mut filled = 0;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(text.to_owned());
            filled += 1;
        }
        if filled > 0 {
            self.dtype = DataType::infer(&self.cells);
        }
        filled
    }

    fn retain_rows(&mut self, keep: &[bool]) {
        let mut flags = keep.iter();
        self.cells.retain(|_| flags.next().copied().unwrap_or(false));
        // An emptied column keeps its type
        if !self.cells.is_empty() {
            self.dtype = DataType::infer(&self.cells);
        }
    }
}

/// Result of filling missing values across a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// Missing cells replaced in numeric columns
    pub filled: usize,
    /// Missing cells left untouched in text columns
    pub skipped: usize,
}

/// Ordered collection of equally long columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from a header and row-major cells
    ///
    /// Every row must have exactly `headers.len()` cells.
    #[must_use]
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let row_count = rows.len();
        let mut buckets: Vec<Vec<Option<String>>> = headers
            .iter()
            .map(|_| Vec::with_capacity(row_count))
            .collect();

        for row in rows {
            for (bucket, cell) in buckets.iter_mut().zip(row) {
                bucket.push(cell);
            }
        }

        let columns = headers
            .into_iter()
            .zip(buckets)
            .map(|(name, cells)| Column::new(name, cells))
            .collect();

        Self { columns, row_count }
    }

    /// `(rows, columns)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.name().to_owned())
            .collect()
    }

    /// First column with the given name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Numeric columns in their original order
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.is_numeric())
    }

    /// Cells of row `index`, in column order
    #[must_use]
    pub fn row(&self, index: usize) -> Vec<Option<&str>> {
        self.columns
            .iter()
            .map(|column| column.cells.get(index).and_then(|cell| cell.as_deref()))
            .collect()
    }

    /// Total number of missing cells
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// Keep only the rows for which `keep` returns true
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        let flags: Vec<bool> = (0..self.row_count).map(&mut keep).collect();
        for column in &mut self.columns {
            column.retain_rows(&flags);
        }
        self.row_count = flags.iter().filter(|flag| **flag).count();
    }

    /// Remove every row that has a missing cell in any column
    ///
    /// Returns the number of rows removed.
    pub fn drop_missing_rows(&mut self) -> usize {
        let before = self.row_count;
        let incomplete: Vec<bool> = (0..self.row_count)
            .map(|index| {
                self.columns
                    .iter()
                    .any(|column| column.cells.get(index).is_some_and(Option::is_none))
            })
            .collect();
        self.retain_rows(|index| !incomplete[index]);
        before - self.row_count
    }

    /// Fill missing cells of numeric columns with `value`
    ///
    /// Text columns are left as they are; their missing cells are counted
    /// in [`FillOutcome::skipped`]. A NaN value would itself read back as
    /// missing, so it fills nothing and every missing cell is skipped.
    pub fn fill_missing_numeric(&mut self, value: f64) -> FillOutcome {
        if value.is_nan() {
            return FillOutcome {
                filled: 0,
                skipped: self.missing_count(),
            };
        }

        let text = value.to_string();
        let mut outcome = FillOutcome::default();
        for column in &mut self.columns {
            if column.is_numeric() {
                outcome.filled += column.fill_missing(&text);
            } else {
                outcome.skipped += column.missing_count();
            }
        }
        outcome
    }
}
