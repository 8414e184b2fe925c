//! Lazily loaded, shared item catalog

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::application::ports::outbound::{CatalogError, ItemCatalogPort};
use crate::domain::value_objects::CatalogItem;

/// Caches the item catalog from its provider and answers exact-name
/// lookups.
///
/// The catalog is fetched at most once per session; concurrent first
/// lookups coalesce into a single in-flight load. A failed load is not
/// cached: the lookup that hit it degrades to a miss and a later
/// lookup retries the provider.
pub struct ItemCatalogService {
    provider: Arc<dyn ItemCatalogPort>,
    index: OnceCell<HashMap<String, CatalogItem>>,
}

impl ItemCatalogService {
    pub fn new(provider: Arc<dyn ItemCatalogPort>) -> Self {
        Self {
            provider,
            index: OnceCell::new(),
        }
    }

    /// Resolve an item display name to its catalog record.
    pub async fn resolve(&self, name: &str) -> Option<CatalogItem> {
        match self.index.get_or_try_init(|| self.load_index()).await {
            Ok(index) => index.get(name).cloned(),
            Err(e) => {
                warn!("item catalog unavailable, resolving nothing: {e}");
                None
            }
        }
    }

    async fn load_index(&self) -> Result<HashMap<String, CatalogItem>, CatalogError> {
        let items = self.provider.load_catalog().await?;
        debug!(items = items.len(), "item catalog loaded");
        Ok(items
            .into_iter()
            .map(|item| (item.name.clone(), item))
            .collect())
    }
}
