//! Blocking HTTP client for the mod portal.

use std::time::Duration;

use fmm_core::config::PortalConfig;
use fmm_core::dependency::Dependency;
use fmm_core::ident::ModIdent;
use fmm_util::errors::{FmmError, FmmResult};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

use crate::api::PortalMod;
use crate::catalog::{select_release, CatalogRelease, RemoteCatalog};

/// [`RemoteCatalog`] backed by the mod portal's `full` mod endpoint.
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    base_url: Url,
    fallback_to_newest: bool,
}

impl PortalClient {
    /// Build a client from the `[portal]` configuration.
    pub fn new(config: &PortalConfig) -> FmmResult<Self> {
        let base_url = Url::parse(&config.url).map_err(|e| FmmError::Config {
            message: format!("Invalid portal url '{}': {e}", config.url),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("fmm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FmmError::CatalogUnreachable {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url,
            fallback_to_newest: config.fallback_to_newest,
        })
    }

    /// `{base}/api/mods/{name}/full`, with the name percent-encoded.
    pub fn full_mod_url(&self, name: &str) -> Result<Url, FmmError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FmmError::Config {
                message: format!("Portal url '{}' cannot have a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(["api", "mods", name, "full"]);
        Ok(url)
    }

    /// Resolve a release's relative download path against the portal root.
    pub fn download_url(&self, path: &str) -> Option<String> {
        self.base_url.join(path).ok().map(String::from)
    }

    fn fetch_mod(&self, name: &str) -> Result<PortalMod, FmmError> {
        let url = self.full_mod_url(name)?;
        tracing::info!("Fetching release list for {name}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FmmError::CatalogUnreachable {
                message: format!("Request to {url} failed: {e}"),
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FmmError::NotFound {
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FmmError::CatalogUnreachable {
                message: format!("HTTP {status} fetching {url}"),
            });
        }

        resp.json::<PortalMod>()
            .map_err(|e| FmmError::CatalogUnreachable {
                message: format!("Invalid response from {url}: {e}"),
            })
    }
}

impl RemoteCatalog for PortalClient {
    fn get_release(&self, dependency: &Dependency) -> Result<CatalogRelease, FmmError> {
        let name = dependency.name();
        let portal_mod = self.fetch_mod(name)?;

        let release = select_release(&portal_mod.releases, dependency, self.fallback_to_newest)
            .ok_or_else(|| {
                tracing::debug!(
                    "{} releases of {name}, none satisfies '{dependency}'",
                    portal_mod.releases.len()
                );
                FmmError::NotFound {
                    name: name.to_string(),
                }
            })?;

        Ok(CatalogRelease {
            ident: ModIdent::new(name, Some(release.version)),
            dependencies: release.info_json.dependencies.clone(),
            file_name: Some(release.file_name.clone()),
            download_url: self.download_url(&release.download_url),
        })
    }
}

/// Append portal credentials to a download URL, as the portal expects for
/// authenticated downloads.
pub fn with_credentials(url: &str, config: &PortalConfig) -> String {
    let Some((username, token)) = config.credentials() else {
        return url.to_string();
    };
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed
                .query_pairs_mut()
                .append_pair("username", username)
                .append_pair("token", token);
            parsed.into()
        }
        Err(_) => url.to_string(),
    }
}
