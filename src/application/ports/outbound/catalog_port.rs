use async_trait::async_trait;

use crate::domain::value_objects::CatalogItem;

/// Error payloads stay as strings so the application layer carries no
/// adapter-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    #[error("catalog payload invalid: {0}")]
    Decode(String),
}

/// Source of the item reference dataset.
#[async_trait]
pub trait ItemCatalogPort: Send + Sync {
    /// Load the full catalog. The catalog service calls this at most
    /// once per session on success; implementations need no caching of
    /// their own.
    async fn load_catalog(&self) -> Result<Vec<CatalogItem>, CatalogError>;
}
