//! Integration tests for loading and saving the config file.

use fittrack::storage::config::{
    default_packages, load_config_from_path, save_config_to_path, AppConfig, ConfigError,
};
use fittrack::Package;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from_path(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.log_filter, "info");
    assert_eq!(config.packages, default_packages());
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = AppConfig {
        log_filter: "fittrack=debug".to_string(),
        packages: vec![
            Package::new("RUN", vec![12000.0, 1.5, 68.0]),
            Package::new("WLK", vec![8000.0, 1.0, 60.0, 165.0]),
        ],
    };

    save_config_to_path(&config, &path).unwrap();
    let loaded = load_config_from_path(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_hand_written_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[packages]]
tag = "SWM"
readings = [720, 1, 80, 25, 40]
"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();

    assert_eq!(config.log_filter, "info");
    assert_eq!(config.packages.len(), 1);
    assert_eq!(config.packages[0].build().unwrap().kind().tag(), "SWM");
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[[packages]]\ntag = 5\n").unwrap();

    assert!(matches!(load_config_from_path(&path), Err(ConfigError::ParseError(_))));
}
