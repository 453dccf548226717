//! Loading configuration files from disk.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use racer::config::{load_config, parse_config, ConfigError};

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("racer-{}-{}.toml", name, std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_sample_config_is_valid() {
    let config = parse_config(include_str!("../racer.toml")).unwrap();

    assert_eq!(config.race.timeout(), Duration::from_secs(10));
    assert_eq!(config.watch.races.len(), 2);
    assert_eq!(config.watch.races[1].targets.len(), 3);
    assert_eq!(config.watch.races[1].timeout_ms, Some(3000));
}

#[test]
fn test_load_from_disk() {
    let path = scratch_file(
        "load",
        r#"
        [race]
        timeout_ms = 1500

        [[watch.races]]
        name = "pair"
        targets = ["http://127.0.0.1:1/", "http://127.0.0.1:2/"]
        "#,
    );

    let config = load_config(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.race.timeout(), Duration::from_millis(1500));
    assert_eq!(config.watch.races[0].name, "pair");
}

#[test]
fn test_empty_target_rejected_at_parse() {
    let path = scratch_file(
        "empty-target",
        r#"
        [[watch.races]]
        name = "pair"
        targets = ["http://a.example", "  "]
        "#,
    );

    let err = load_config(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_values_reported_together() {
    let path = scratch_file(
        "invalid",
        r#"
        [race]
        timeout_ms = 0

        [[watch.races]]
        name = "single"
        targets = ["gopher://a.example"]
        "#,
    );

    let err = load_config(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation errors, got {other:?}"),
    }
}
