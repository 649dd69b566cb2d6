//! Operation: list the local mods directory.

use fmm_core::config::Config;
use fmm_resolver::index::{LocalModIndex, ModFile};
use fmm_util::errors::FmmResult;

/// Every entry of the configured mods directory, in index order.
pub fn list(config: &Config) -> FmmResult<Vec<ModFile>> {
    let mods_dir = config.mods_dir();
    let index = LocalModIndex::build(&mods_dir)?;
    tracing::debug!("{} entries in {}", index.len(), mods_dir.display());
    Ok(index.entries().to_vec())
}
