//! Configuration validation logic

use crate::config::ExplorerConfig;
use crate::utils::path::same_path;
use anyhow::{Result, anyhow};
use std::path::Path;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - Any path is empty
/// - An output path points at the input dataset
#[inline]
pub fn validate_config(config: &ExplorerConfig) -> Result<()> {
    for (key, value) in [
        ("input", &config.input),
        ("clean_output", &config.clean_output),
        ("filter_output", &config.filter_output),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!("'{key}' cannot be empty"));
        }
    }

    let input = Path::new(&config.input);
    for (key, value) in [
        ("clean_output", &config.clean_output),
        ("filter_output", &config.filter_output),
    ] {
        if same_path(input, Path::new(value)) {
            return Err(anyhow!(
                "'{key}' must not overwrite the input dataset '{}'",
                config.input
            ));
        }
    }

    Ok(())
}
