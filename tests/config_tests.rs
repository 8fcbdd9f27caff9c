//! Application config loading tests

use std::fs;
use std::path::Path;

use tetrimino::config::{AppConfig, ConfigError};

#[test]
fn test_missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("tetrimino.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tetrimino.toml");
    fs::write(
        &path,
        "catalog_path = \"pieces.txt\"\nframe_ms = 20\n\n[engine]\nrows_per_level = 5\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.frame_ms, 20);
    assert_eq!(config.catalog_path.as_deref(), Some(Path::new("pieces.txt")));
    assert_eq!(config.engine.rows_per_level, 5);
    assert_eq!(config.engine.rotate_cooldown_ms, 200);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tetrimino.toml");
    fs::write(&path, "frame_ms = [").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_saved_config_loads_back() {
    let mut config = AppConfig::default();
    config.seed = Some(99);
    config.engine.start_level = 4;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tetrimino.toml");
    fs::write(&path, config.to_toml().unwrap()).unwrap();

    assert_eq!(AppConfig::load_from(&path).unwrap(), config);
}
