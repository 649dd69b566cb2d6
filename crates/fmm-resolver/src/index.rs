//! Snapshot of a local mods directory.
//!
//! The index is built from one directory scan and then only read. Entries
//! are sorted by `(name, version)`, so all versions of a mod sit next to
//! each other with the newest last.

use std::cmp::Ordering;
use std::fmt;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_core::info_json::{InfoJson, INFO_JSON};
use fmm_core::mod_list::RESERVED_FILES;
use fmm_util::errors::{FmmError, FmmResult};
use zip::ZipArchive;

use crate::cache::DependencyCache;

/// How a mod is stored in the mods directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKind {
    /// An unpacked mod folder or a symlink to one. Its `info.json` is read
    /// during the scan, so the declared dependencies are already known.
    ExpandedDirectory(Vec<Dependency>),
    /// A `.zip`, named `Name_Version.zip` or just `Name.zip`. Dependencies
    /// are read from the embedded `info.json` on first request.
    Archive,
    /// Any other file. Only the file name is known.
    LooseFile,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageKind::ExpandedDirectory(_) => "directory",
            StorageKind::Archive => "archive",
            StorageKind::LooseFile => "file",
        })
    }
}

/// One entry of the mods directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModFile {
    pub ident: ModIdent,
    pub path: PathBuf,
    pub storage: StorageKind,
}

#[derive(Debug, Clone, Default)]
pub struct LocalModIndex {
    entries: Vec<ModFile>,
}

impl LocalModIndex {
    /// Scan the immediate children of `root`.
    ///
    /// Only an unreadable `root` is fatal. An entry whose metadata cannot
    /// be read is logged and left out.
    pub fn build(root: &Path) -> FmmResult<Self> {
        let dir = fs::read_dir(root).map_err(|e| FmmError::Generic {
            message: format!("Failed to read mods directory {}: {e}", root.display()),
        })?;

        let mut entries = Vec::new();
        for entry in dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {e}", root.display());
                    continue;
                }
            };
            let path = entry.path();
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!("Skipping non UTF-8 file name {}", path.display());
                continue;
            };
            if RESERVED_FILES.contains(&file_name.as_str()) {
                continue;
            }
            match classify(&path, &file_name) {
                Ok(mod_file) => entries.push(mod_file),
                Err(e) => tracing::warn!("Skipping {}: {e}", path.display()),
            }
        }

        tracing::debug!("Indexed {} entries in {}", entries.len(), root.display());
        Ok(Self::from_entries(entries))
    }

    /// Build an index from already classified entries.
    pub fn from_entries(mut entries: Vec<ModFile>) -> Self {
        entries.sort_by(compare_entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[ModFile] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest entry named like `dependency` whose version satisfies it.
    pub fn find(&self, dependency: &Dependency) -> Option<&ModFile> {
        let name = dependency.name();
        let start = self
            .entries
            .partition_point(|e| e.ident.name.as_str() < name);
        let end = self
            .entries
            .partition_point(|e| e.ident.name.as_str() <= name);

        self.entries[start..end]
            .iter()
            .rev()
            .find(|e| dependency.test(e.ident.version.as_ref()))
    }

    /// Declared dependencies of `entry`.
    ///
    /// Archive metadata is read once per path and remembered in `cache`.
    pub fn dependencies(
        &self,
        entry: &ModFile,
        cache: &mut DependencyCache,
    ) -> Result<Vec<Dependency>, FmmError> {
        match &entry.storage {
            StorageKind::ExpandedDirectory(dependencies) => Ok(dependencies.clone()),
            StorageKind::Archive => {
                if cache.contains(&entry.path) {
                    tracing::debug!("Using cached metadata for {}", entry.path.display());
                }
                cache.get_or_try_insert_with(&entry.path, || {
                    read_archive_dependencies(&entry.ident, &entry.path)
                })
            }
            StorageKind::LooseFile => Err(FmmError::MetadataUnavailable {
                name: entry.ident.name.clone(),
                reason: format!("{} is not a mod directory or archive", entry.path.display()),
            }),
        }
    }
}

/// Order by name, then version, an unknown version first.
pub fn compare_entries(a: &ModFile, b: &ModFile) -> Ordering {
    a.ident
        .name
        .cmp(&b.ident.name)
        .then_with(|| a.ident.version.cmp(&b.ident.version))
}

fn classify(path: &Path, file_name: &str) -> Result<ModFile, FmmError> {
    // fs::metadata follows symlinks, so a linked mod folder counts as a directory.
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        let info = InfoJson::from_path(&path.join(INFO_JSON))?;
        return Ok(ModFile {
            ident: info.ident(),
            path: path.to_path_buf(),
            storage: StorageKind::ExpandedDirectory(info.dependencies),
        });
    }

    let mod_file = match ModIdent::from_zip_name(file_name) {
        Some(ident) => ModFile {
            ident,
            path: path.to_path_buf(),
            storage: StorageKind::Archive,
        },
        None => ModFile {
            ident: ModIdent::from_file_name(file_name),
            path: path.to_path_buf(),
            storage: StorageKind::LooseFile,
        },
    };
    Ok(mod_file)
}

fn read_archive_dependencies(ident: &ModIdent, path: &Path) -> Result<Vec<Dependency>, FmmError> {
    let unavailable = |reason: String| FmmError::MetadataUnavailable {
        name: ident.name.clone(),
        reason,
    };

    let file = File::open(path).map_err(|e| unavailable(format!("{}: {e}", path.display())))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| unavailable(format!("{}: {e}", path.display())))?;

    let member = archive
        .file_names()
        .filter_map(|name| info_json_depth(name).map(|depth| (depth, name)))
        .min_by_key(|(depth, _)| *depth)
        .map(|(_, name)| name.to_string())
        .ok_or_else(|| unavailable(format!("no {INFO_JSON} in {}", path.display())))?;

    let mut bytes = Vec::new();
    archive
        .by_name(&member)
        .and_then(|mut f| f.read_to_end(&mut bytes).map_err(Into::into))
        .map_err(|e| unavailable(format!("{member}: {e}")))?;

    tracing::debug!("Read {member} from {}", path.display());
    let info = InfoJson::from_slice(&bytes, &path.join(&member))?;
    Ok(info.dependencies)
}

/// Depth of an `info.json` member: 1 at the archive root, 2 inside the
/// top-level folder. Deeper or differently named members are not metadata.
fn info_json_depth(member: &str) -> Option<usize> {
    let parts: Vec<&str> = member.split('/').filter(|p| !p.is_empty()).collect();
    match parts.last() {
        Some(&last) if last == INFO_JSON && parts.len() <= 2 => Some(parts.len()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_json_member_depth() {
        assert_eq!(info_json_depth("info.json"), Some(1));
        assert_eq!(info_json_depth("flib_0.12.9/info.json"), Some(2));
        assert_eq!(info_json_depth("flib_0.12.9/locale/info.json"), None);
        assert_eq!(info_json_depth("flib_0.12.9/not-info.json"), None);
        assert_eq!(info_json_depth("flib_0.12.9/"), None);
    }

    #[test]
    fn unknown_version_sorts_first() {
        let loose = ModFile {
            ident: ModIdent::named("a"),
            path: PathBuf::from("a"),
            storage: StorageKind::LooseFile,
        };
        let versioned = ModFile {
            ident: "a@0.0.1".parse().unwrap(),
            path: PathBuf::from("a_0.0.1.zip"),
            storage: StorageKind::Archive,
        };
        assert_eq!(compare_entries(&loose, &versioned), Ordering::Less);
    }
}
