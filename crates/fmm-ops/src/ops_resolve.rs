//! Operation: resolve seed mods and check which are installed.

use std::path::Path;

use fmm_core::config::Config;
use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_core::input;
use fmm_portal::catalog::{OfflineCatalog, RemoteCatalog};
use fmm_portal::client::PortalClient;
use fmm_resolver::index::LocalModIndex;
use fmm_resolver::resolver::{self, Resolution};
use fmm_util::errors::FmmResult;

/// Options for `fmm resolve`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolveOptions {
    /// Only check the seeds, do not expand dependencies.
    pub no_deps: bool,
    /// Never contact the mod portal.
    pub offline: bool,
}

/// Whether a mod is installed in the mods directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModPresence {
    pub ident: ModIdent,
    pub present: bool,
}

#[derive(Debug)]
pub struct ResolveOutcome {
    pub seeds: Vec<ModIdent>,
    /// `None` when dependencies were not expanded.
    pub resolution: Option<Resolution>,
    /// Presence of the resolved mods, or of the seeds under `no_deps`.
    pub presence: Vec<ModPresence>,
}

impl ResolveOutcome {
    pub fn missing(&self) -> impl Iterator<Item = &ModPresence> {
        self.presence.iter().filter(|p| !p.present)
    }
}

/// Read the seeds from `tokens`, resolve their dependency closure against
/// the configured mods directory and portal, then check what is installed.
pub fn resolve<S: AsRef<str>>(
    config: &Config,
    tokens: &[S],
    options: ResolveOptions,
) -> FmmResult<ResolveOutcome> {
    let seeds = input::read_seeds(tokens)?;
    let mods_dir = config.mods_dir();
    tracing::info!("Resolving {} seed mods in {}", seeds.len(), mods_dir.display());

    if options.no_deps {
        let presence = check_presence(&mods_dir, &seeds)?;
        return Ok(ResolveOutcome {
            seeds,
            resolution: None,
            presence,
        });
    }

    let index = LocalModIndex::build(&mods_dir)?;
    let catalog = build_catalog(config, options.offline)?;

    let resolution = resolver::resolve(&seeds, &index, &catalog);
    let presence = check_presence(&mods_dir, &resolution.idents())?;

    Ok(ResolveOutcome {
        seeds,
        resolution: Some(resolution),
        presence,
    })
}

/// The catalog consulted for mods missing locally: the mod portal, or
/// nothing at all when offline.
pub(crate) fn build_catalog(config: &Config, offline: bool) -> FmmResult<Box<dyn RemoteCatalog>> {
    if offline {
        return Ok(Box::new(OfflineCatalog));
    }
    Ok(Box::new(PortalClient::new(&config.portal)?))
}

/// Look each identity up in a fresh scan of `mods_dir`. A versioned
/// identity must be installed at exactly that version.
pub fn check_presence(mods_dir: &Path, idents: &[ModIdent]) -> FmmResult<Vec<ModPresence>> {
    let index = LocalModIndex::build(mods_dir)?;
    Ok(idents
        .iter()
        .map(|ident| ModPresence {
            ident: ident.clone(),
            present: index.find(&Dependency::from_ident(ident.clone())).is_some(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_filters_absent_mods() {
        let outcome = ResolveOutcome {
            seeds: Vec::new(),
            resolution: None,
            presence: vec![
                ModPresence {
                    ident: ModIdent::named("flib"),
                    present: true,
                },
                ModPresence {
                    ident: ModIdent::named("stdlib"),
                    present: false,
                },
            ],
        };
        let missing: Vec<&str> = outcome.missing().map(|p| p.ident.name.as_str()).collect();
        assert_eq!(missing, vec!["stdlib"]);
    }
}
