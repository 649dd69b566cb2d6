//! Mod version parsing and ordering.
//!
//! Mod versions are always three dot-separated decimal numbers. Leading
//! zeros are allowed (`0.18.01` is `0.18.1`), missing components are not.

use std::fmt;
use std::str::FromStr;

use fmm_util::errors::FmmError;
use serde::{Deserialize, Serialize};

/// A `major.minor.patch` mod version.
///
/// Field order matters: the derived ordering compares `major`, then
/// `minor`, then `patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl ModVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the operand of a dependency constraint.
    ///
    /// Unlike [`FromStr`], a two-component `major.minor` operand is accepted
    /// and read as `major.minor.0`; the game itself writes `base >= 1.1`.
    pub fn parse_operand(s: &str) -> Result<Self, FmmError> {
        match parse_components(s)?.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            parts => Err(invalid(
                s,
                format!("expected 2 or 3 components, found {}", parts.len()),
            )),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ModVersion {
    type Err = FmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_components(s)?.as_slice() {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            parts => Err(invalid(
                s,
                format!("expected 3 components, found {}", parts.len()),
            )),
        }
    }
}

impl TryFrom<String> for ModVersion {
    type Error = FmmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ModVersion> for String {
    fn from(v: ModVersion) -> Self {
        v.to_string()
    }
}

fn parse_components(s: &str) -> Result<Vec<u64>, FmmError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(invalid(s, "empty version".to_string()));
    }
    trimmed
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(s, format!("'{part}' is not a number")));
            }
            part.parse::<u64>()
                .map_err(|e| invalid(s, format!("'{part}': {e}")))
        })
        .collect()
}

fn invalid(input: &str, reason: String) -> FmmError {
    FmmError::InvalidVersion {
        input: input.to_string(),
        reason,
    }
}
