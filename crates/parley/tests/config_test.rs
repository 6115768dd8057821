//! Tests for the configuration system.

use parley::{OutputFormat, ParleyConfig, ParleyErrorKind, PatternKind};
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_bundled_defaults() {
    let config = ParleyConfig::load().unwrap();
    assert!(config.scan.kinds.contains(&PatternKind::MentionUser));
    assert!(config.scan.kinds.contains(&PatternKind::TextUrl));
}

#[test]
fn test_from_file_overrides() {
    let file = write_config(
        r#"
[scan]
kinds = ["text_bold", "Mention_Role"]
first_only = true

[output]
format = "json"
"#,
    );

    let config = ParleyConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.scan.kinds,
        vec![PatternKind::TextBold, PatternKind::MentionRole]
    );
    assert!(config.scan.first_only);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.json_logs);
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("[output]\njson_logs = true\n");

    let config = ParleyConfig::from_file(file.path()).unwrap();
    assert_eq!(config.scan, ParleyConfig::default().scan);
    assert!(config.output.json_logs);
    assert_eq!(config.output.format, OutputFormat::Human);
}

#[test]
fn test_unknown_kind_is_config_error() {
    let file = write_config("[scan]\nkinds = [\"TEXT_BLINK\"]\n");

    let err = ParleyConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), ParleyErrorKind::Config(_)));
    assert!(err.to_string().contains("TEXT_BLINK"));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ParleyConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err.kind(), ParleyErrorKind::Config(_)));
}
