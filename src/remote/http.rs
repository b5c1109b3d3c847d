// src/remote/http.rs
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use super::CatalogSource;
use crate::core::entry::CatalogEntry;
use crate::error::CoreError;
use crate::CoreResult as Result;

/// Single `GET` against the catalog endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    endpoint: String,
    http: Client,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .redirect(Policy::limited(3))
            .user_agent(concat!("pokedex-vault/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Use a pre-configured client (proxies, TLS roots, ...)
    pub fn with_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Source for the endpoint in the global config
    pub fn from_config() -> Result<Self> {
        Self::new(crate::config::load().remote.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Vec<CatalogEntry>> {
        let resp = self.http.get(&self.endpoint).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Remote(format!("HTTP error, status {status}")));
        }
        let body = resp.bytes()?;
        let entries: Vec<CatalogEntry> = serde_json::from_slice(&body)?;
        tracing::debug!(endpoint = %self.endpoint, count = entries.len(), "catalog fetched");
        Ok(entries)
    }
}
