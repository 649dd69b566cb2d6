#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_portal::api::{PortalRelease, ReleaseInfo};
use fmm_portal::catalog::{select_release, CatalogRelease, RemoteCatalog};
use fmm_util::errors::FmmError;
use zip::write::SimpleFileOptions;

fn info_json(name: &str, version: &str, deps: &[&str]) -> String {
    serde_json::json!({
        "name": name,
        "version": version,
        "title": name,
        "factorio_version": "1.1",
        "dependencies": deps,
    })
    .to_string()
}

/// Write an unpacked mod folder `root/<name>_<version>/info.json`.
pub fn write_dir_mod(root: &Path, name: &str, version: &str, deps: &[&str]) -> PathBuf {
    let dir = root.join(format!("{name}_{version}"));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("info.json"), info_json(name, version, deps)).unwrap();
    dir
}

/// Write a packed mod `root/<name>_<version>.zip` with its `info.json`
/// inside the usual top-level folder.
pub fn write_zip_mod(root: &Path, name: &str, version: &str, deps: &[&str]) -> PathBuf {
    let path = root.join(format!("{name}_{version}.zip"));
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file(
        format!("{name}_{version}/info.json"),
        SimpleFileOptions::default(),
    )
    .unwrap();
    zip.write_all(info_json(name, version, deps).as_bytes())
        .unwrap();
    zip.start_file(
        format!("{name}_{version}/data.lua"),
        SimpleFileOptions::default(),
    )
    .unwrap();
    zip.write_all(b"-- nothing").unwrap();
    zip.finish().unwrap();
    path
}

/// Write an arbitrary file into the mods directory.
pub fn write_file(root: &Path, file_name: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(file_name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// In-memory catalog that records every request it receives.
#[derive(Default)]
pub struct MapCatalog {
    releases: HashMap<String, Vec<PortalRelease>>,
    unreachable: Vec<String>,
    pub requests: RefCell<Vec<String>>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_release(mut self, name: &str, version: &str, deps: &[&str]) -> Self {
        let release = PortalRelease {
            download_url: format!("/download/{name}/{version}"),
            file_name: format!("{name}_{version}.zip"),
            info_json: ReleaseInfo {
                dependencies: deps.iter().map(|d| d.parse().unwrap()).collect(),
                factorio_version: Some("1.1".to_string()),
            },
            version: version.parse().unwrap(),
            released_at: None,
            sha1: None,
        };
        self.releases
            .entry(name.to_string())
            .or_default()
            .push(release);
        self
    }

    /// Make every request for `name` fail as a transport error.
    pub fn with_unreachable(mut self, name: &str) -> Self {
        self.unreachable.push(name.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl RemoteCatalog for MapCatalog {
    fn get_release(&self, dependency: &Dependency) -> Result<CatalogRelease, FmmError> {
        let name = dependency.name();
        self.requests.borrow_mut().push(name.to_string());

        if self.unreachable.iter().any(|n| n == name) {
            return Err(FmmError::CatalogUnreachable {
                message: format!("connection reset fetching {name}"),
            });
        }
        let not_found = || FmmError::NotFound {
            name: name.to_string(),
        };
        let releases = self.releases.get(name).ok_or_else(not_found)?;
        let release = select_release(releases, dependency, false).ok_or_else(not_found)?;
        Ok(CatalogRelease {
            ident: ModIdent::new(name, Some(release.version)),
            dependencies: release.info_json.dependencies.clone(),
            file_name: Some(release.file_name.clone()),
            download_url: Some(format!("https://portal.test{}", release.download_url)),
        })
    }
}

/// Names of resolved mods, in resolution order.
pub fn names(idents: &[ModIdent]) -> Vec<String> {
    idents.iter().map(|i| i.name.clone()).collect()
}
