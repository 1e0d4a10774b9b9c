use std::path::{Path, PathBuf};

use airplane::config::*;
use airplane::error::ConfigError;

fn origin() -> &'static Path {
    Path::new("airplane.toml")
}

#[test]
fn defaults_match_the_classic_game() {
    let config = GameConfig::default();
    assert_eq!(config.asset_dir, PathBuf::from("data"));
    assert_eq!(config.log_file, PathBuf::from("airplane.log"));
    assert_eq!(config.seed, None);
    assert_eq!(config.rules.max_health, 10);
    assert_eq!(config.rules.slide_rate, 10);
    assert_eq!(config.rules.first_spawn_delay_secs, None);
}

#[test]
fn empty_file_is_all_defaults() {
    let config = GameConfig::from_toml_str("", origin()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn partial_file_overrides_only_what_it_names() {
    let raw = r#"
        seed = 1234
        asset_dir = "sprites"

        [rules]
        max_health = 3
    "#;
    let config = GameConfig::from_toml_str(raw, origin()).unwrap();
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.asset_dir, PathBuf::from("sprites"));
    assert_eq!(config.log_file, PathBuf::from("airplane.log"));
    assert_eq!(config.rules.max_health, 3);
    assert_eq!(config.rules.slide_rate, 10);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = GameConfig::from_toml_str("lives = 3", origin()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    assert!(err.to_string().contains("airplane.toml"));

    let err = GameConfig::from_toml_str("[rules]\nspeed = 2", origin()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn wrong_types_are_rejected() {
    let err = GameConfig::from_toml_str("seed = \"abc\"", origin()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airplane.toml");
    std::fs::write(&path, "[rules]\nfirst_spawn_delay_secs = 1\n").unwrap();

    let config = GameConfig::load(&path).unwrap();
    assert_eq!(config.rules.first_spawn_delay_secs, Some(1));
}

#[test]
fn load_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }), "{err:?}");
}
