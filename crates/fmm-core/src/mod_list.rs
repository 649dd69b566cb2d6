//! `mod-list.json`: the game's record of which mods are enabled.

use std::path::Path;

use fmm_util::errors::FmmError;
use serde::{Deserialize, Serialize};

use crate::ident::{ModIdent, BASE_MOD};
use crate::version::ModVersion;

pub const MOD_LIST_JSON: &str = "mod-list.json";
pub const MOD_SETTINGS_DAT: &str = "mod-settings.dat";

/// Files in a mods directory that are game bookkeeping, not mods.
pub const RESERVED_FILES: [&str; 2] = [MOD_LIST_JSON, MOD_SETTINGS_DAT];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModListJson {
    #[serde(default)]
    pub mods: Vec<ModListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModListEntry {
    pub name: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<ModVersion>,
}

impl ModListJson {
    /// The list the game starts from: only `base`, enabled.
    pub fn with_base() -> Self {
        Self {
            mods: vec![ModListEntry {
                name: BASE_MOD.to_string(),
                enabled: true,
                version: None,
            }],
        }
    }

    /// Parse `mod-list.json` contents. `origin` is only used for error
    /// messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, FmmError> {
        serde_json::from_str(text).map_err(|e| FmmError::MetadataParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read `path`, or start from [`ModListJson::with_base`] when it does
    /// not exist yet.
    pub fn load(path: &Path) -> Result<Self, FmmError> {
        if !path.is_file() {
            tracing::debug!("{} does not exist, starting a new list", path.display());
            return Ok(Self::with_base());
        }
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    pub fn save(&self, path: &Path) -> Result<(), FmmError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| FmmError::Generic {
            message: format!("Failed to serialize {}: {e}", path.display()),
        })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Identities of the enabled mods, excluding `base`. A pinned version is
    /// carried over.
    pub fn enabled(&self) -> Vec<ModIdent> {
        self.mods
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| ModIdent::new(entry.name.clone(), entry.version))
            .filter(|ident| !ident.is_base())
            .collect()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.mods.iter().any(|entry| entry.name == name && entry.enabled)
    }

    /// Enable `name`, pinned to `version` when one is given. Unknown names
    /// are appended.
    pub fn enable(&mut self, name: &str, version: Option<ModVersion>) {
        match self.mods.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.enabled = true;
                entry.version = version;
            }
            None => self.mods.push(ModListEntry {
                name: name.to_string(),
                enabled: true,
                version,
            }),
        }
    }

    /// Disable `name` and drop its pinned version. Returns `false` when
    /// the name is not listed or is `base`, which is never disabled.
    pub fn disable(&mut self, name: &str) -> bool {
        if name == BASE_MOD {
            return false;
        }
        match self.mods.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.enabled = false;
                entry.version = None;
                true
            }
            None => false,
        }
    }

    /// Disable every mod except `base`.
    pub fn disable_all(&mut self) {
        for entry in self.mods.iter_mut().filter(|e| e.name != BASE_MOD) {
            entry.enabled = false;
            entry.version = None;
        }
    }
}
