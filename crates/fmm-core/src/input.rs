//! Turning user input into the seed mods for resolution.
//!
//! Each command-line token is one of:
//! - a path ending in `.log`: a game log, mods taken from its checksum block
//! - a path ending in `.json`: a `mod-list.json`, enabled mods taken
//! - a path ending in `.zip`: a save file (not supported)
//! - anything else: a `Name` or `Name@Version` identifier

use std::path::Path;

use fmm_util::errors::{FmmError, FmmResult};

use crate::ident::ModIdent;
use crate::mod_list::ModListJson;

const CHECKSUM_MARKER: &str = "Checksum of ";

/// Extract mod names from the checksum block of a `factorio-current.log`.
///
/// Lines look like `   0.642 Checksum of Squeak Through: 1384541474`. Only
/// the first contiguous block of such lines is read; `base` is skipped.
/// No versions are known from a log.
pub fn parse_log(text: &str) -> Vec<ModIdent> {
    let mut mods = Vec::new();
    let mut in_checksums = false;

    for line in text.lines() {
        let Some((_, rest)) = line.split_once(CHECKSUM_MARKER) else {
            if in_checksums {
                break;
            }
            continue;
        };
        in_checksums = true;

        let name = rest.rsplit_once(':').map_or(rest, |(name, _)| name).trim();
        if name.is_empty() {
            continue;
        }
        let ident = ModIdent::named(name);
        if !ident.is_base() {
            mods.push(ident);
        }
    }

    mods
}

/// Enabled mods from the contents of a `mod-list.json`.
pub fn parse_mod_list(text: &str, origin: &Path) -> Result<Vec<ModIdent>, FmmError> {
    Ok(ModListJson::parse(text, origin)?.enabled())
}

/// Expand command-line tokens into the ordered seed list.
pub fn read_seeds<S: AsRef<str>>(tokens: &[S]) -> FmmResult<Vec<ModIdent>> {
    let mut seeds = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if token.ends_with(".log") {
            let text = read_input(token)?;
            let found = parse_log(&text);
            tracing::debug!("{} mods listed in {token}", found.len());
            seeds.extend(found);
        } else if token.ends_with(".json") {
            let text = read_input(token)?;
            seeds.extend(parse_mod_list(&text, Path::new(token))?);
        } else if token.ends_with(".zip") {
            return Err(FmmError::Generic {
                message: format!("Reading mods from save files is not supported: {token}"),
            }
            .into());
        } else {
            seeds.push(token.parse::<ModIdent>()?);
        }
    }

    Ok(seeds)
}

fn read_input(path: &str) -> Result<String, FmmError> {
    std::fs::read_to_string(path).map_err(|e| FmmError::Generic {
        message: format!("Failed to read {path}: {e}"),
    })
}
