//! Transitive closure of a set of seed mods: breadth-first, first-seen name
//! wins, local collection before the remote catalog.

use std::collections::VecDeque;
use std::path::PathBuf;

use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_portal::catalog::RemoteCatalog;
use fmm_util::errors::FmmError;

use crate::cache::{DependencyCache, VisitedSet};
use crate::index::LocalModIndex;
use crate::report::{ResolutionReport, ResolveFailure};

/// The output of dependency resolution.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Resolved mods in the order they were resolved.
    pub mods: Vec<ResolvedMod>,
    pub report: ResolutionReport,
}

impl Resolution {
    /// The resolved identities, in resolution order.
    pub fn idents(&self) -> Vec<ModIdent> {
        self.mods.iter().map(|m| m.ident.clone()).collect()
    }
}

/// A single resolved mod with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMod {
    pub ident: ModIdent,
    pub source: ResolvedSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedSource {
    /// Present in the local mods directory at this path.
    Local(PathBuf),
    /// Chosen from the remote catalog.
    Remote {
        file_name: Option<String>,
        download_url: Option<String>,
    },
}

impl ResolvedMod {
    pub fn is_local(&self) -> bool {
        matches!(self.source, ResolvedSource::Local(_))
    }
}

/// Resolve `seeds` and everything they transitively require.
///
/// Each seed becomes a required dependency, exact when it carries a version.
/// A dependency whose name was already dequeued is dropped, whatever its
/// constraint, and is not enqueued at all once the name is visited. Only
/// `Required` and `NoLoadOrder` edges are followed, and never the edge to
/// `base`. A mod that cannot be resolved is recorded in the report and its
/// subtree is not explored.
pub fn resolve<C>(seeds: &[ModIdent], index: &LocalModIndex, catalog: &C) -> Resolution
where
    C: RemoteCatalog + ?Sized,
{
    let mut resolution = Resolution::default();
    let mut visited = VisitedSet::new();
    let mut archive_deps = DependencyCache::new();

    let mut queue: VecDeque<Dependency> = seeds
        .iter()
        .filter(|seed| !seed.is_base())
        .cloned()
        .map(Dependency::from_ident)
        .collect();

    while let Some(dependency) = queue.pop_front() {
        if !visited.visit(dependency.name()) {
            tracing::debug!("{} already visited, dropping '{dependency}'", dependency.name());
            continue;
        }

        match resolve_one(&dependency, index, catalog, &mut archive_deps) {
            Ok((resolved, declared)) => {
                tracing::debug!("Resolved '{dependency}' to {}", resolved.ident);
                queue.extend(declared.into_iter().filter(|d| {
                    d.kind.is_traversed() && !d.target.is_base() && !visited.contains(d.name())
                }));
                resolution.mods.push(resolved);
            }
            Err(error) => {
                tracing::warn!("Skipping '{dependency}': {error}");
                resolution.report.add(ResolveFailure { dependency, error });
            }
        }
    }

    if !archive_deps.is_empty() {
        tracing::debug!("Read metadata from {} archives", archive_deps.len());
    }
    resolution
}

/// Resolve one dependency, returning the chosen mod and what it declares.
fn resolve_one<C>(
    dependency: &Dependency,
    index: &LocalModIndex,
    catalog: &C,
    archive_deps: &mut DependencyCache,
) -> Result<(ResolvedMod, Vec<Dependency>), FmmError>
where
    C: RemoteCatalog + ?Sized,
{
    if let Some(file) = index.find(dependency) {
        let declared = index.dependencies(file, archive_deps)?;
        let resolved = ResolvedMod {
            ident: file.ident.clone(),
            source: ResolvedSource::Local(file.path.clone()),
        };
        return Ok((resolved, declared));
    }

    let release = catalog.get_release(dependency)?;
    let resolved = ResolvedMod {
        ident: release.ident,
        source: ResolvedSource::Remote {
            file_name: release.file_name,
            download_url: release.download_url,
        },
    };
    Ok((resolved, release.dependencies))
}
