//! Item catalog providers

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::outbound::{CatalogError, ItemCatalogPort};
use crate::domain::value_objects::CatalogItem;

/// Fetches the item catalog from the static dataset API.
pub struct HttpItemCatalog {
    client: Client,
    url: String,
}

impl HttpItemCatalog {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl ItemCatalogPort for HttpItemCatalog {
    async fn load_catalog(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Fetch(format!(
                "unexpected status {} from {}",
                response.status(),
                self.url
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

/// Reads the item catalog from a local JSON file.
pub struct FileItemCatalog {
    path: PathBuf,
}

impl FileItemCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ItemCatalogPort for FileItemCatalog {
    async fn load_catalog(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::Fetch(format!("{}: {e}", self.path.display())))?;
        serde_json::from_slice(&raw).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
