//! The `info.json` metadata file every mod carries.

use std::path::Path;

use fmm_util::errors::FmmError;
use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;
use crate::ident::ModIdent;
use crate::version::ModVersion;

/// File name of the metadata file, at the top of an expanded mod directory
/// or one folder deep inside a mod archive.
pub const INFO_JSON: &str = "info.json";

/// The subset of `info.json` that dependency resolution needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoJson {
    pub name: String,
    pub version: ModVersion,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub factorio_version: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl InfoJson {
    /// Read and parse an `info.json` from disk.
    pub fn from_path(path: &Path) -> Result<Self, FmmError> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes, path)
    }

    /// Parse `info.json` contents. `origin` is only used for error messages.
    pub fn from_slice(bytes: &[u8], origin: &Path) -> Result<Self, FmmError> {
        serde_json::from_slice(bytes).map_err(|e| FmmError::MetadataParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn ident(&self) -> ModIdent {
        ModIdent::new(self.name.clone(), Some(self.version))
    }
}
