//! YAML configuration loading and parsing

use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::system::System;
use crate::utils::path::expand_tilde;
use anyhow::{Context as _, Result};

/// Load and parse YAML configuration from file
///
/// The raw document is checked against the JSON schema first so unknown
/// keys and wrongly typed values are reported before deserialization.
pub fn load_config(system: &dyn System, path: &str) -> Result<ExplorerConfig> {
    let path_obj = expand_tilde(path);

    let content = system.read_to_string(&path_obj).map_err(|err| {
        ExplorerError::configuration(format!(
            "Failed to read configuration file {path}: {err}"
        ))
    })?;

    let mut document: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|err| {
        ExplorerError::configuration(format!(
            "Failed to parse YAML configuration in file: {path}\n{err}"
        ))
    })?;

    // An empty file means "all defaults"
    if document.is_null() {
        document = serde_yaml::Value::Mapping(serde_yaml::Mapping::new());
    }

    let document_json = serde_json::to_value(&document)
        .context("Failed to convert configuration to JSON for validation")?;

    crate::config::schema::validate_against_schema(&document_json)
        .map_err(|err| ExplorerError::configuration(format!("{path}: {err}")))?;

    let config: ExplorerConfig = serde_yaml::from_value(document).map_err(|err| {
        ExplorerError::configuration(format!("Invalid configuration in {path}: {err}"))
    })?;

    config
        .validate()
        .map_err(|err| ExplorerError::configuration(format!("{path}: {err}")))?;

    Ok(config)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn partial_config_keeps_defaults() {
        let system = MockSystem::new()
            .with_file("/cfg/explorer.yaml", b"input: data/raw.csv\n")
            .unwrap();
        let config = load_config(&system, "/cfg/explorer.yaml").unwrap();
        assert_eq!(config.input, "data/raw.csv");
        assert_eq!(config.clean_output, ExplorerConfig::default().clean_output);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let system = MockSystem::new().with_file("/cfg/empty.yaml", b"").unwrap();
        let config = load_config(&system, "/cfg/empty.yaml").unwrap();
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let system = MockSystem::new()
            .with_file("/cfg/bad.yaml", b"input: a.csv\ndelimiter: ';'\n")
            .unwrap();
        let err = load_config(&system, "/cfg/bad.yaml").unwrap_err();
        assert_eq!(err.downcast_ref::<ExplorerError>().unwrap().exit_code(), 1);
    }

    #[test]
    fn malformed_yaml_is_configuration_error() {
        let system = MockSystem::new()
            .with_file("/cfg/broken.yaml", b"input: [unterminated\n")
            .unwrap();
        let err = load_config(&system, "/cfg/broken.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
    }
}
