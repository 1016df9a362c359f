use slidegen::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Config::default() matches the documented defaults.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.export.scale, 3);
    assert_eq!(config.export.jpeg_quality, 90);
    assert_eq!(config.export.file_name, "presentation.pdf");
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.storage.dir.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("slidegen/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[storage]
dir = "/tmp/decks"

[export]
scale = 2
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.export.scale, 2);
    assert_eq!(config.export.jpeg_quality, 90);
    assert_eq!(config.storage_dir(), std::path::PathBuf::from("/tmp/decks"));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_scale_out_of_range_fails_validation() {
    let (_dir, path) = write_config("[export]\nscale = 8\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("scale")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_quality_zero_fails_validation() {
    let (_dir, path) = write_config("[export]\njpeg_quality = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[export\nscale = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_default_storage_dir_is_named_after_app() {
    assert!(Config::default().storage_dir().ends_with("slidegen"));
}
