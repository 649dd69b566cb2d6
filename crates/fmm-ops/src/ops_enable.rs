//! Operation: enable mods and their dependencies in `mod-list.json`.

use std::collections::HashMap;

use fmm_core::config::Config;
use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_core::input;
use fmm_core::mod_list::{ModListJson, MOD_LIST_JSON};
use fmm_core::version::ModVersion;
use fmm_resolver::index::LocalModIndex;
use fmm_resolver::resolver::{self, Resolution};
use fmm_util::errors::FmmResult;

use crate::ops_resolve::build_catalog;

/// Options for `fmm enable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnableOptions {
    /// Enable only the given mods, not their dependencies.
    pub no_deps: bool,
    /// Never contact the mod portal.
    pub offline: bool,
    /// Disable every other mod first.
    pub disable_all: bool,
}

#[derive(Debug)]
pub struct EnableOutcome {
    /// Installed mods now enabled, in resolution order.
    pub enabled: Vec<ModIdent>,
    /// Mods that should be enabled but are not installed.
    pub missing: Vec<ModIdent>,
    /// `None` when dependencies were not expanded.
    pub resolution: Option<Resolution>,
}

/// Enable the mods named by `tokens`, plus everything they require unless
/// `no_deps` is set, and write `mod-list.json` back.
///
/// A mod is pinned to a version in the list only when its token named one.
pub fn enable<S: AsRef<str>>(
    config: &Config,
    tokens: &[S],
    options: EnableOptions,
) -> FmmResult<EnableOutcome> {
    let seeds = input::read_seeds(tokens)?;
    let mods_dir = config.mods_dir();
    let index = LocalModIndex::build(&mods_dir)?;
    let list_path = mods_dir.join(MOD_LIST_JSON);
    let mut list = ModListJson::load(&list_path)?;

    if options.disable_all {
        list.disable_all();
    }

    let (targets, resolution) = if options.no_deps {
        let targets: Vec<ModIdent> = seeds.iter().filter(|s| !s.is_base()).cloned().collect();
        (targets, None)
    } else {
        let catalog = build_catalog(config, options.offline)?;
        let resolution = resolver::resolve(&seeds, &index, &catalog);
        (resolution.idents(), Some(resolution))
    };

    let pinned: HashMap<&str, ModVersion> = seeds
        .iter()
        .filter_map(|seed| seed.version.map(|v| (seed.name.as_str(), v)))
        .collect();

    let mut enabled = Vec::new();
    let mut missing = Vec::new();
    for target in targets {
        match index.find(&Dependency::from_ident(target.clone())) {
            Some(file) => {
                let name = file.ident.name.as_str();
                list.enable(name, pinned.get(name).copied());
                enabled.push(file.ident.clone());
            }
            None => {
                tracing::warn!("{target} is not installed, leaving it out of {MOD_LIST_JSON}");
                missing.push(target);
            }
        }
    }

    list.save(&list_path)?;
    tracing::info!("Enabled {} mods in {}", enabled.len(), list_path.display());

    Ok(EnableOutcome {
        enabled,
        missing,
        resolution,
    })
}
