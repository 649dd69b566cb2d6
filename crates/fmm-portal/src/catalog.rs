//! The remote catalog seam the resolver queries when a mod is not present
//! locally, and the rule for picking a release.

use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_util::errors::FmmError;

use crate::api::PortalRelease;

/// A release chosen by a catalog for one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRelease {
    /// Name and concrete version of the release.
    pub ident: ModIdent,
    /// Dependencies the release declares, unfiltered.
    pub dependencies: Vec<Dependency>,
    /// Archive file name, e.g. `flib_0.12.9.zip`.
    pub file_name: Option<String>,
    /// Absolute download URL, without credentials.
    pub download_url: Option<String>,
}

/// Something that can answer "which release of this mod satisfies this
/// constraint, and what does it depend on".
///
/// Calls are blocking; the resolver issues them one at a time.
pub trait RemoteCatalog {
    /// Fails with [`FmmError::NotFound`] when the mod or a satisfying
    /// release does not exist, and with [`FmmError::CatalogUnreachable`]
    /// when the catalog itself could not be queried.
    fn get_release(&self, dependency: &Dependency) -> Result<CatalogRelease, FmmError>;
}

impl<C: RemoteCatalog + ?Sized> RemoteCatalog for &C {
    fn get_release(&self, dependency: &Dependency) -> Result<CatalogRelease, FmmError> {
        (**self).get_release(dependency)
    }
}

impl<C: RemoteCatalog + ?Sized> RemoteCatalog for Box<C> {
    fn get_release(&self, dependency: &Dependency) -> Result<CatalogRelease, FmmError> {
        (**self).get_release(dependency)
    }
}

/// A catalog that knows nothing. Used for `--offline`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineCatalog;

impl RemoteCatalog for OfflineCatalog {
    fn get_release(&self, dependency: &Dependency) -> Result<CatalogRelease, FmmError> {
        Err(FmmError::NotFound {
            name: dependency.name().to_string(),
        })
    }
}

/// Pick the newest release whose version satisfies `dependency`.
///
/// With `fallback_to_newest`, a constraint that no release satisfies still
/// yields the newest release.
pub fn select_release<'a>(
    releases: &'a [PortalRelease],
    dependency: &Dependency,
    fallback_to_newest: bool,
) -> Option<&'a PortalRelease> {
    let mut newest_first: Vec<&PortalRelease> = releases.iter().collect();
    newest_first.sort_by(|a, b| b.version.cmp(&a.version));

    let matching = newest_first
        .iter()
        .find(|release| dependency.test(Some(&release.version)))
        .copied();

    match matching {
        Some(release) => Some(release),
        None if fallback_to_newest => newest_first.first().copied(),
        None => None,
    }
}
