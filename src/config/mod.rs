//! Configuration management module
//!
//! Resolves the default dataset and output paths. Defaults are built in and
//! may be overridden by a YAML file that is validated against an embedded
//! JSON schema before use.

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::error::ExplorerError;
use crate::system::System;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file picked up from the working directory when no
/// `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "csv-explorer.yaml";

/// Default paths used when a command is invoked without `--file`/`--output`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Dataset read by every command
    pub input: String,

    /// Where `clean` writes its result
    pub clean_output: String,

    /// Where `filter` writes its result
    pub filter_output: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            input: "../data/dataset.csv".to_owned(),
            clean_output: "../data/cleaned_dataset.csv".to_owned(),
            filter_output: "../data/filtered_dataset.csv".to_owned(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate path settings
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }

    /// Resolve the configuration for this invocation
    ///
    /// An explicit path must exist. Without one, `csv-explorer.yaml` in the
    /// working directory is used when present, and the built-in defaults
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the explicit file is missing, or
    /// if the selected file fails to parse or validate.
    pub fn resolve(system: &dyn System, explicit: Option<&str>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            if !system.is_file(&expand_tilde(path)) {
                return Err(ExplorerError::configuration(format!(
                    "Configuration file not found: {path}"
                ))
                .into());
            }
            return Self::load_from_file(system, path);
        }

        if system.is_file(Path::new(DEFAULT_CONFIG_FILE)) {
            debug!("Using configuration from {DEFAULT_CONFIG_FILE}");
            return Self::load_from_file(system, DEFAULT_CONFIG_FILE);
        }

        debug!("No configuration file found, using built-in defaults");
        Ok(Self::default())
    }

    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input)
    }

    #[must_use]
    pub fn clean_output_path(&self) -> PathBuf {
        expand_tilde(&self.clean_output)
    }

    #[must_use]
    pub fn filter_output_path(&self) -> PathBuf {
        expand_tilde(&self.filter_output)
    }
}
