//! Descriptive statistics over the present values of a numeric column

use super::Column;
use serde::Serialize;

/// Mean, median and sample standard deviation of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

impl ColumnStats {
    /// Compute the statistics of a column over its non-missing values
    #[must_use]
    pub fn from_column(column: &Column) -> Self {
        let values = column.present_values();
        Self {
            column: column.name().to_owned(),
            mean: mean(&values),
            median: median(&values),
            std: sample_std(&values),
        }
    }
}

/// Arithmetic mean; NaN for no values
#[must_use]
#[expect(clippy::as_conversions, clippy::cast_precision_loss, reason = "Value counts fit in f64")]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median; the average of the two middle values for even counts
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (denominator N-1); NaN for fewer than two values
#[must_use]
#[expect(clippy::as_conversions, clippy::cast_precision_loss, reason = "Value counts fit in f64")]
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|value| (value - avg).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}
