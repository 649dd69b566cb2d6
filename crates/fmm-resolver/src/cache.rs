//! Per-resolution bookkeeping: which mod names have been visited, and the
//! dependency lists already read out of archives.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use fmm_core::dependency::Dependency;
use fmm_util::errors::FmmError;

/// Tracks which mod names have been visited during resolution
/// to prevent infinite loops in circular dependency chains.
#[derive(Debug, Default)]
pub struct VisitedSet {
    visited: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as visited. Returns `false` if already visited.
    pub fn visit(&mut self, name: &str) -> bool {
        self.visited.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.visited.contains(name)
    }
}

/// Dependency lists read from mod archives, keyed by archive path.
///
/// Only successful reads are stored; a failed read is retried on the next
/// request.
#[derive(Debug, Default)]
pub struct DependencyCache {
    entries: HashMap<PathBuf, Vec<Dependency>>,
}

impl DependencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list for `path`, or compute it with `load` and
    /// remember it.
    pub fn get_or_try_insert_with<F>(
        &mut self,
        path: &Path,
        load: F,
    ) -> Result<Vec<Dependency>, FmmError>
    where
        F: FnOnce() -> Result<Vec<Dependency>, FmmError>,
    {
        if let Some(cached) = self.entries.get(path) {
            return Ok(cached.clone());
        }
        let loaded = load()?;
        self.entries.insert(path.to_path_buf(), loaded.clone());
        Ok(loaded)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
