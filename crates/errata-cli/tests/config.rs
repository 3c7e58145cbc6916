use std::path::PathBuf;
use std::time::Duration;

use errata_cli::config::{load_config, save_config, ErrataConfig};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, ErrataConfig::default());
    assert_eq!(config.suggestion_delay(), Duration::from_millis(900));
}

#[test]
fn unversioned_config_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "data_dir": "/tmp/errata-data" }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/errata-data")));
    assert_eq!(config.suggestion_delay_ms, 900);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ErrataConfig {
        config_version: 0,
        data_dir: Some(dir.path().join("data")),
        suggestion_delay_ms: 250,
        created_at: Some(jiff::Timestamp::UNIX_EPOCH),
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.suggestion_delay(), Duration::from_millis(250));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn version_that_does_not_fit_u32_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    // 2^32 + 1 would wrap to 1 if truncated.
    std::fs::write(&path, r#"{ "config_version": 4294967297 }"#).unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("not a valid version"));

    std::fs::write(&path, r#"{ "config_version": "one" }"#).unwrap();
    assert!(load_config(&path).is_err());
}
