//! Integration tests for configuration and rules loading

use dragnet::config::load_config;
use dragnet::domain::{DragnetError, RuleSet};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_full_config_file_round_trip() {
    let toml_content = r#"
[scan]
recursive = false
report_prefix = "findings"
max_file_size_mb = 64

[extraction]
pdf_dpi = 300
probe_dpi = 72
languages = ["eng", "spa"]

[detection]
fuzzy_threshold = 85.0

[logging]
local_enabled = false
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();
    file.flush().unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert!(!config.scan.recursive);
    assert_eq!(config.scan.report_prefix, "findings");
    assert_eq!(config.scan.max_file_size_mb, Some(64));
    assert_eq!(config.extraction.pdf_dpi, 300);
    assert_eq!(config.extraction.probe_dpi, 72);
    assert_eq!(config.extraction.languages, vec!["eng", "spa"]);
    assert_eq!(config.detection.fuzzy_threshold, 85.0);
}

#[test]
fn test_empty_config_file_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"").unwrap();
    file.flush().unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert!(config.scan.recursive);
    assert_eq!(config.scan.report_prefix, "dragnet_report");
    assert_eq!(config.extraction.pdf_dpi, 400);
    assert_eq!(config.detection.fuzzy_threshold, 80.0);
}

#[test]
fn test_malformed_config_file_is_a_configuration_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[scan\nrecursive = ").unwrap();
    file.flush().unwrap();

    let result = load_config(Some(file.path()));
    assert!(matches!(result, Err(DragnetError::Configuration(_))));
}

#[test]
fn test_out_of_range_config_values_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[extraction]\npdf_dpi = 0\n").unwrap();
    file.flush().unwrap();

    let result = load_config(Some(file.path()));
    assert!(matches!(result, Err(DragnetError::Configuration(_))));
}

#[test]
fn test_rules_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"{
            "Email": { "regex": "[\\w.+-]+@[\\w-]+\\.[\\w.-]+" },
            "Credentials": { "keywords": ["Password", "PIN"] }
        }"#,
    )
    .unwrap();
    file.flush().unwrap();

    let rules = RuleSet::from_file(file.path()).unwrap();
    assert_eq!(rules.len(), 2);

    let credentials = rules
        .iter()
        .find(|rule| rule.category == "Credentials")
        .unwrap();
    assert_eq!(credentials.keywords, vec!["password", "pin"]);
    assert!(credentials.regex.is_none());
}

#[test]
fn test_missing_rules_file_is_fatal() {
    let result = RuleSet::from_file("/no/such/definitions.json");
    assert!(matches!(result, Err(DragnetError::Rules(_))));
}

#[test]
fn test_malformed_rules_file_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ this is not json }").unwrap();
    file.flush().unwrap();

    let result = RuleSet::from_file(file.path());
    assert!(matches!(result, Err(DragnetError::Rules(_))));
}

#[test]
fn test_shipped_definitions_file_compiles() {
    // The repository ships a default rules file; it must always load
    let rules = RuleSet::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/definitions.json"
    ))
    .unwrap();
    assert!(!rules.is_empty());
    assert!(rules.categories().contains(&"Email"));
    assert!(rules.categories().contains(&"Phone Number"));
}
