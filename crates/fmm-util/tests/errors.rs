use std::path::PathBuf;

use fmm_util::errors::{ErrorKind, FmmError};

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = FmmError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_not_found_display() {
    let err = FmmError::NotFound {
        name: "rampant".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "rampant was not found locally or on the mod portal"
    );
}

#[test]
fn test_metadata_parse_display_includes_path() {
    let err = FmmError::MetadataParse {
        path: PathBuf::from("/mods/broken/info.json"),
        message: "expected value at line 1".to_string(),
    };
    let s = err.to_string();
    assert!(s.contains("/mods/broken/info.json"), "got: {s}");
    assert!(s.contains("expected value"), "got: {s}");
}

#[test]
fn test_catalog_unreachable_display() {
    let err = FmmError::CatalogUnreachable {
        message: "timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Mod portal unreachable: timeout");
}

#[test]
fn test_config_error_display() {
    let err = FmmError::Config {
        message: "bad toml".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad toml");
}

#[test]
fn test_generic_error_display() {
    let err = FmmError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_error_kinds() {
    let not_found = FmmError::NotFound {
        name: "x".to_string(),
    };
    assert_eq!(not_found.kind(), ErrorKind::NotFound);

    let unavailable = FmmError::MetadataUnavailable {
        name: "x".to_string(),
        reason: "loose file".to_string(),
    };
    assert_eq!(unavailable.kind(), ErrorKind::MetadataUnavailable);

    let unreachable = FmmError::CatalogUnreachable {
        message: "dns".to_string(),
    };
    assert_eq!(unreachable.kind(), ErrorKind::CatalogUnreachable);

    let io: FmmError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert_eq!(io.kind(), ErrorKind::Other);
}
