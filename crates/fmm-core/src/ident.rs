use std::fmt;
use std::str::FromStr;

use fmm_util::errors::FmmError;
use serde::{Deserialize, Serialize};

use crate::version::ModVersion;

/// Name of the implicit dependency on the game engine itself. It is always
/// present and never resolved.
pub const BASE_MOD: &str = "base";

/// A mod name plus, when known, a concrete version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModIdent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<ModVersion>,
}

impl ModIdent {
    pub fn new(name: impl Into<String>, version: Option<ModVersion>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// An identity with no version.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Parse a packed mod filename of the form `Name_1.2.3.zip`.
    ///
    /// The name is everything before the last `_`. Returns `None` if the
    /// file is not a `.zip` or the suffix is not a valid version.
    pub fn from_archive_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".zip")?;
        let (name, version) = stem.rsplit_once('_')?;
        if name.is_empty() {
            return None;
        }
        let version = version.parse::<ModVersion>().ok()?;
        Some(Self::new(name, Some(version)))
    }

    /// Identity of any `.zip` in a mod directory. `Name_1.2.3.zip` carries
    /// its version; any other non-empty stem is taken whole as the name,
    /// with no version. Returns `None` for other files.
    pub fn from_zip_name(file_name: &str) -> Option<Self> {
        if let Some(ident) = Self::from_archive_name(file_name) {
            return Some(ident);
        }
        let stem = file_name.strip_suffix(".zip")?;
        if stem.is_empty() {
            return None;
        }
        Some(Self::named(stem))
    }

    /// Best-effort identity for any file in a mod directory: the archive
    /// form when it parses, otherwise the file name (minus `.zip`) with no
    /// version.
    pub fn from_file_name(file_name: &str) -> Self {
        Self::from_archive_name(file_name).unwrap_or_else(|| {
            Self::named(file_name.strip_suffix(".zip").unwrap_or(file_name))
        })
    }

    pub fn is_base(&self) -> bool {
        self.name == BASE_MOD
    }
}

impl fmt::Display for ModIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}@{}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// Parses the command-line form `Name` or `Name@1.2.3`.
impl FromStr for ModIdent {
    type Err = FmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, version) = match s.split_once('@') {
            Some((name, version)) => (name, Some(version)),
            None => (s, None),
        };
        if name.is_empty() {
            return Err(FmmError::InvalidIdent {
                input: s.to_string(),
                reason: "empty mod name".to_string(),
            });
        }
        let version = version
            .map(|v| {
                v.parse::<ModVersion>().map_err(|e| FmmError::InvalidIdent {
                    input: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;
        Ok(Self::new(name, version))
    }
}
