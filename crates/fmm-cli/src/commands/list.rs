//! Handler for `fmm list`.

use miette::Result;

use fmm_core::config::Config;
use fmm_ops::ops_list;
use fmm_util::progress;

pub fn exec(config: &Config) -> Result<()> {
    let entries = ops_list::list(config)?;

    if entries.is_empty() {
        println!("No mods in {}", config.mods_dir().display());
        return Ok(());
    }

    for entry in &entries {
        let version = entry
            .ident
            .version
            .map_or_else(|| "-".to_string(), |v| v.to_string());
        println!("{:<40} {:<12} {}", entry.ident.name, version, entry.storage);
    }
    progress::status("Listed", &format!("{} entries", entries.len()));
    Ok(())
}
