//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::{ItemCatalogPort, StylePort};
use crate::application::services::{ItemCatalogService, ReformatService};
use crate::infrastructure::catalog::{FileItemCatalog, HttpItemCatalog};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::styles::{LogStyleSink, LIST_STYLES};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub reformat_service: ReformatService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // Catalog provider: local file when configured, dataset API otherwise
        let provider: Arc<dyn ItemCatalogPort> = match &config.catalog_path {
            Some(path) => Arc::new(FileItemCatalog::new(path)),
            None => Arc::new(HttpItemCatalog::new(&config.catalog_url)),
        };
        let catalog = Arc::new(ItemCatalogService::new(provider));

        let reformat_service =
            ReformatService::new(catalog, config.link_items, config.item_page_url.as_str());

        // The list stylesheet has no data dependency; inject it once here.
        let styles: Arc<dyn StylePort> = Arc::new(LogStyleSink);
        styles.inject("better-journal-list", LIST_STYLES);

        Self {
            config,
            reformat_service,
        }
    }
}
