use std::path::PathBuf;

use fmm_core::config::{dirs_path, Config, DEFAULT_PORTAL_URL};
use fmm_util::fs::home_dir;

#[test]
fn test_default_portal_settings() {
    let config = Config::default();
    assert_eq!(config.portal.url, DEFAULT_PORTAL_URL);
    assert!(!config.portal.fallback_to_newest);
    assert_eq!(config.portal.timeout_secs, 30);
    assert!(config.portal.credentials().is_none());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = Config::parse_toml("").unwrap();
    assert_eq!(config.portal.url, DEFAULT_PORTAL_URL);
    assert!(config.paths.mods_dir.is_none());
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[paths]
mods-dir = "/srv/factorio/mods"

[portal]
url = "https://mirror.example.com"
username = "engineer"
token = "abc123"
fallback-to-newest = true
timeout-secs = 5
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.mods_dir(), PathBuf::from("/srv/factorio/mods"));
    assert_eq!(config.portal.url, "https://mirror.example.com");
    assert_eq!(config.portal.credentials(), Some(("engineer", "abc123")));
    assert!(config.portal.fallback_to_newest);
    assert_eq!(config.portal.timeout_secs, 5);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = Config::parse_toml("[portal\nurl = 1").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"), "got: {err}");
}

#[test]
fn test_mods_dir_from_game_dir() {
    let config = Config::parse_toml("[paths]\ngame-dir = \"/opt/factorio\"\n").unwrap();
    assert_eq!(config.mods_dir(), PathBuf::from("/opt/factorio/mods"));
}

#[test]
fn test_mods_dir_default() {
    let config = Config::default();
    assert_eq!(
        config.mods_dir(),
        home_dir().join(".factorio").join("mods")
    );
}

#[test]
fn test_mods_dir_expands_tilde() {
    let config = Config::parse_toml("[paths]\nmods-dir = \"~/mods\"\n").unwrap();
    assert_eq!(config.mods_dir(), home_dir().join("mods"));
}

#[test]
fn test_load_explicit_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("fmm.toml");
    std::fs::write(&path, "[paths]\nmods-dir = \"/x/mods\"\n").unwrap();
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.mods_dir(), PathBuf::from("/x/mods"));
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    assert!(Config::load(Some(&tmp.path().join("nope.toml"))).is_err());
}

#[test]
fn test_dirs_path_ends_with_fmm() {
    assert!(dirs_path().ends_with(".fmm"));
}
