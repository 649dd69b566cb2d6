use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all fmm operations.
#[derive(Debug, Error, Diagnostic)]
pub enum FmmError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A version string is not `major.minor.patch`.
    #[error("Invalid version '{input}': {reason}")]
    #[diagnostic(help("Versions are written as three dot-separated numbers, e.g. 1.2.3"))]
    InvalidVersion { input: String, reason: String },

    /// A dependency string could not be parsed.
    #[error("Invalid dependency '{input}': {reason}")]
    InvalidDependency { input: String, reason: String },

    /// A mod identifier (`Name` or `Name@Version`) could not be parsed.
    #[error("Invalid mod identifier '{input}': {reason}")]
    #[diagnostic(help("Mods are given as `Name` or `Name@1.2.3`"))]
    InvalidIdent { input: String, reason: String },

    /// Mod metadata (`info.json`) exists but is malformed.
    #[error("Failed to parse metadata at {}: {message}", path.display())]
    MetadataParse { path: PathBuf, message: String },

    /// Mod metadata cannot be obtained for this entry at all.
    #[error("No dependency information available for {name}: {reason}")]
    MetadataUnavailable { name: String, reason: String },

    /// The mod is neither in the local collection nor in the remote catalog.
    #[error("{name} was not found locally or on the mod portal")]
    NotFound { name: String },

    /// The remote catalog could not be reached or answered garbage.
    #[error("Mod portal unreachable: {message}")]
    CatalogUnreachable { message: String },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.fmm/config.toml or the --config file"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Coarse classification of an [`FmmError`], used when reporting
/// per-mod failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MetadataParse,
    MetadataUnavailable,
    NotFound,
    CatalogUnreachable,
    Other,
}

impl FmmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FmmError::MetadataParse { .. } => ErrorKind::MetadataParse,
            FmmError::MetadataUnavailable { .. } => ErrorKind::MetadataUnavailable,
            FmmError::NotFound { .. } => ErrorKind::NotFound,
            FmmError::CatalogUnreachable { .. } => ErrorKind::CatalogUnreachable,
            _ => ErrorKind::Other,
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type FmmResult<T> = miette::Result<T>;
