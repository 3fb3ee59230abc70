//! Configuration resolution tests

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

use csv_explorer::config::{DEFAULT_CONFIG_FILE, ExplorerConfig};
use csv_explorer::system::MockSystem;
use std::path::PathBuf;

#[test]
fn defaults_without_any_file() {
    let system = MockSystem::new();
    let config = ExplorerConfig::resolve(&system, None).unwrap();
    assert_eq!(config, ExplorerConfig::default());
    assert_eq!(config.input_path(), PathBuf::from("../data/dataset.csv"));
    assert_eq!(config.clean_output_path(), PathBuf::from("../data/cleaned_dataset.csv"));
    assert_eq!(config.filter_output_path(), PathBuf::from("../data/filtered_dataset.csv"));
}

#[test]
fn working_directory_file_overrides_defaults() {
    let system = MockSystem::new()
        .with_file(DEFAULT_CONFIG_FILE, b"clean_output: cleaned.csv\n")
        .unwrap();
    let config = ExplorerConfig::resolve(&system, None).unwrap();
    assert_eq!(config.clean_output, "cleaned.csv");
    assert_eq!(config.input, ExplorerConfig::default().input);
}

#[test]
fn explicit_file_wins_over_working_directory_file() {
    let system = MockSystem::new()
        .with_file(DEFAULT_CONFIG_FILE, b"input: local.csv\n")
        .unwrap()
        .with_file("/etc/explorer.yaml", b"input: shared.csv\n")
        .unwrap();
    let config = ExplorerConfig::resolve(&system, Some("/etc/explorer.yaml")).unwrap();
    assert_eq!(config.input, "shared.csv");
}

#[test]
fn output_equal_to_input_is_rejected() {
    let system = MockSystem::new()
        .with_file("/c.yaml", b"input: data.csv\nfilter_output: ./data.csv\n")
        .unwrap();
    let err = ExplorerConfig::resolve(&system, Some("/c.yaml")).unwrap_err();
    assert!(err.to_string().contains("filter_output"));
}

#[test]
fn wrong_value_type_is_rejected() {
    let system = MockSystem::new()
        .with_file("/c.yaml", b"input: [a, b]\n")
        .unwrap();
    assert!(ExplorerConfig::resolve(&system, Some("/c.yaml")).is_err());
}
}
