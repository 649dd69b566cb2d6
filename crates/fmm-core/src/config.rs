use std::path::{Path, PathBuf};

use fmm_util::errors::FmmError;
use fmm_util::fs::{expand_tilde, home_dir};
use serde::{Deserialize, Serialize};

/// Default mod portal base URL.
pub const DEFAULT_PORTAL_URL: &str = "https://mods.factorio.com";

/// User configuration loaded from `~/.fmm/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub portal: PortalConfig,
}

/// Directory settings from `[paths]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default, rename = "mods-dir")]
    pub mods_dir: Option<PathBuf>,
    #[serde(default, rename = "game-dir")]
    pub game_dir: Option<PathBuf>,
}

/// Mod portal settings from `[portal]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_portal_url")]
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// When no release satisfies a constraint, take the newest release
    /// anyway instead of reporting the mod as not found.
    #[serde(default, rename = "fallback-to-newest")]
    pub fallback_to_newest: bool,
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            url: default_portal_url(),
            username: None,
            token: None,
            fallback_to_newest: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_portal_url() -> String {
    DEFAULT_PORTAL_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl PortalConfig {
    /// Username and token, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.token) {
            (Some(user), Some(token)) => Some((user.as_str(), token.as_str())),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `~/.fmm/config.toml` when no
    /// path is given. A missing default file yields defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> miette::Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !path.is_file() {
            if explicit {
                return Err(FmmError::Config {
                    message: format!("Config file {} does not exist", path.display()),
                }
                .into());
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| FmmError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content).map_err(Into::into)
    }

    pub fn parse_toml(content: &str) -> Result<Self, FmmError> {
        toml::from_str(content).map_err(|e| FmmError::Config {
            message: format!("Failed to parse config: {e}"),
        })
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// The mods directory to operate on: `mods-dir` if set, else
    /// `<game-dir>/mods`, else `~/.factorio/mods`.
    pub fn mods_dir(&self) -> PathBuf {
        if let Some(dir) = &self.paths.mods_dir {
            return expand_tilde(dir);
        }
        if let Some(game) = &self.paths.game_dir {
            return expand_tilde(game).join("mods");
        }
        home_dir().join(".factorio").join("mods")
    }
}

/// Returns the path to the fmm data directory (`~/.fmm/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".fmm")
}
