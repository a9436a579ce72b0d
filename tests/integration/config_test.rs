//! Integration tests for config file loading and saving

use tempfile::TempDir;
use tlctl::config::Container;
use tlctl::{Config, ControlError};

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let content = r#"
[player]
bottom = 4
container = "inline"
full_width = true

[timeline]
duration_secs = 3.5
"#;
    std::fs::write(&path, content).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.player.bottom, 4);
    assert_eq!(config.player.container, Container::Inline);
    assert!(config.player.full_width);
    assert!(!config.player.light);
    assert_eq!(config.timeline.duration_secs, 3.5);
}

#[test]
fn invalid_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[player\nbottom = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ControlError::Config { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("tlctl").join("config.toml");

    let mut config = Config::default();
    config.player.light = true;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
