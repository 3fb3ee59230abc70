//! Missing-value detection and column type inference

/// Cell texts that are read as missing values
const MISSING_TOKENS: &[&str] = &[
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "None",
    "n/a",
    "nan",
    "null",
];

/// Check whether a raw CSV field denotes a missing value
#[must_use]
pub fn is_missing_token(text: &str) -> bool {
    MISSING_TOKENS.contains(&text)
}

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Every present cell parses as a 64-bit integer
    Integer,
    /// Every present cell parses as a float, or no cell is present
    Float,
    /// Anything else
    Text,
}

/// Parse a present cell as a number, ignoring surrounding whitespace
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

impl DataType {
    /// Infer the type of a column from its cells
    ///
    /// Missing cells do not take part in inference and surrounding
    /// whitespace is ignored. A column whose cells are all missing is
    /// `Float`; a column with no cells at all is `Text`.
    #[must_use]
    pub fn infer(cells: &[Option<String>]) -> Self {
        if cells.is_empty() {
            return Self::Text;
        }

        let mut dtype = Self::Integer;
        for text in cells.iter().flatten() {
            let trimmed = text.trim();
            if dtype == Self::Integer && trimmed.parse::<i64>().is_ok() {
                continue;
            }
            if trimmed.parse::<f64>().is_ok() {
                dtype = Self::Float;
            } else {
                return Self::Text;
            }
        }

        if cells.iter().all(Option::is_none) {
            return Self::Float;
        }
        dtype
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}
