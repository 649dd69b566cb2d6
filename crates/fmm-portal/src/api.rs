//! Response types of the mod portal API (`/api/mods/{name}/full`).

use fmm_core::dependency::Dependency;
use fmm_core::version::ModVersion;
use serde::{Deserialize, Serialize};

/// A mod with its complete release history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalMod {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub releases: Vec<PortalRelease>,
}

/// One published release of a mod.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalRelease {
    /// Path relative to the portal root, e.g. `/download/flib/5f5d...`.
    pub download_url: String,
    pub file_name: String,
    #[serde(default)]
    pub info_json: ReleaseInfo,
    pub version: ModVersion,
    #[serde(default)]
    pub released_at: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
}

/// The part of a release's `info.json` the portal echoes back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseInfo {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub factorio_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_mod_response() {
        let body = r#"{
            "category": "utilities",
            "name": "flib",
            "title": "Factorio Library",
            "releases": [
                {
                    "download_url": "/download/flib/aaa",
                    "file_name": "flib_0.12.8.zip",
                    "info_json": {"dependencies": ["base >= 1.1"], "factorio_version": "1.1"},
                    "released_at": "2023-01-01T00:00:00.000000Z",
                    "sha1": "deadbeef",
                    "version": "0.12.8"
                },
                {
                    "download_url": "/download/flib/bbb",
                    "file_name": "flib_0.12.9.zip",
                    "info_json": {"factorio_version": "1.1"},
                    "version": "0.12.9"
                }
            ]
        }"#;
        let parsed: PortalMod = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.name, "flib");
        assert_eq!(parsed.releases.len(), 2);
        assert_eq!(parsed.releases[0].info_json.dependencies.len(), 1);
        assert!(parsed.releases[1].info_json.dependencies.is_empty());
        assert_eq!(parsed.releases[1].version, ModVersion::new(0, 12, 9));
    }
}
