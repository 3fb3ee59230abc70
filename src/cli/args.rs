use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line arguments for csv-explorer
#[derive(Parser, Debug, Clone)]
#[command(name = "csv-explorer")]
#[command(about = "A CLI tool for inspecting and lightly cleaning CSV datasets")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file with default dataset and output paths
    /// [default: ./csv-explorer.yaml when present]
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load dataset and show shape and columns
    Load(LoadArgs),

    /// Compute and display summary statistics for numeric columns
    Summary(SummaryArgs),

    /// Drop rows with missing values or fill them with a constant
    Clean(CleanArgs),

    /// Keep rows whose value in a column lies within a range
    Filter(FilterArgs),
}

/// Arguments for `load`
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Path to your dataset CSV file [default: ../data/dataset.csv]
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

/// Arguments for `summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Path to your dataset CSV file [default: ../data/dataset.csv]
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Table)]
    pub format: SummaryFormat,
}

/// Rendering of the summary statistics
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON array of per-column records
    Json,
}

/// Arguments for `clean`
#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Path to your dataset CSV file [default: ../data/dataset.csv]
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Path to save the cleaned CSV file [default: ../data/cleaned_dataset.csv]
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Drop rows with missing values
    #[arg(long, conflicts_with = "fillna")]
    pub dropna: bool,

    /// Fill missing values in numeric columns with this value
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true, value_parser = parse_fill_value)]
    pub fillna: Option<f64>,
}

/// Arguments for `filter`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Path to your dataset CSV file [default: ../data/dataset.csv]
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Path to save the filtered CSV file [default: ../data/filtered_dataset.csv]
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Column to filter on
    #[arg(long, value_name = "NAME")]
    pub column: String,

    /// Minimum value (inclusive)
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Maximum value (inclusive)
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub max: Option<f64>,
}

/// Parse a `--fillna` value; NaN is rejected because it reads back as missing
fn parse_fill_value(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|err| format!("invalid float '{value}': {err}"))?;
    if parsed.is_nan() {
        return Err("NaN is a missing value and cannot be used to fill".to_owned());
    }
    Ok(parsed)
}
