//! Tests for emitter config loading.

use crate::{ConfigError, EmitterConfig, EventNames, ReportLevel};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Verify that an empty config parses with defaults.
#[test]
fn parse_minimal_config() {
    let config = EmitterConfig::load_from_str("{}").expect("config");
    assert_eq!(config.events, EventNames::List(Vec::new()));
    assert_eq!(config.report_level, ReportLevel::Error);
}

/// Events may be declared as an ordered list.
#[test]
fn parse_event_list() {
    let json5 = r#"{ events: ["onUpdate", "onError"], report_level: "warn" }"#;
    let config = EmitterConfig::load_from_str(json5).expect("config");
    assert_eq!(config.events.names(), vec!["onUpdate", "onError"]);
    assert_eq!(config.report_level, ReportLevel::Warn);
}

/// Events may be declared as an object keyed by name.
#[test]
fn parse_event_map() {
    let json5 = r#"{ events: { onUpdate: "onUpdate", onError: true } }"#;
    let config = EmitterConfig::load_from_str(json5).expect("config");
    assert_eq!(config.events.names(), vec!["onError", "onUpdate"]);
}

/// Reject unexpected top-level config keys.
#[test]
fn rejects_unknown_top_level_key() {
    let err = EmitterConfig::load_from_str("{ unexpected: true }").unwrap_err();
    assert!(matches!(err, ConfigError::DecodeFailed(_)));
    assert!(format!("{err}").contains("unknown field"));
}

/// Reject empty event names with the offending path.
#[test]
fn rejects_empty_event_name() {
    let err = EmitterConfig::load_from_str(r#"{ events: ["onUpdate", ""] }"#).unwrap_err();
    match err {
        ConfigError::InvalidField { ref path, .. } => {
            assert_eq!(path, "events[1]");
            assert_eq!(
                format!("{err}"),
                "invalid event declaration at events[1]: event name must not be empty"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Whitespace is part of a name, not an absent one.
#[test]
fn accepts_whitespace_event_names() {
    let config = EmitterConfig::load_from_str(r#"{ events: [" ", "on update "] }"#).expect("config");
    assert_eq!(config.events.names(), vec![" ", "on update "]);
}

/// Duplicate names are tolerated since membership is idempotent.
#[test]
fn tolerates_duplicate_event_names() {
    let json5 = r#"{ events: ["onUpdate", "onUpdate"] }"#;
    let config = EmitterConfig::load_from_str(json5).expect("config");
    assert_eq!(config.events.len(), 2);
}

/// Malformed JSON5 surfaces as a parse error.
#[test]
fn rejects_malformed_json5() {
    let err = EmitterConfig::load_from_str("{ events: [").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed(_)));
    assert!(format!("{err}").starts_with("failed to parse emitter config"));
}

/// Load a config from disk.
#[test]
fn load_from_path_reads_file() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("emitter.json5");
    fs::write(
        &path,
        "// model emitter\n{ events: ['onUpdate', 'onError'], report_level: 'off' }",
    )
    .expect("write");

    let config = EmitterConfig::load_from_path(&path).expect("config");
    assert_eq!(config.events.names(), vec!["onUpdate", "onError"]);
    assert_eq!(config.report_level, ReportLevel::Off);
}

/// Missing files surface as read errors.
#[test]
fn load_from_missing_path_fails() {
    let temp = TempDir::new().expect("tmp");
    let err = EmitterConfig::load_from_path(temp.path().join("missing.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed(_)));
}
