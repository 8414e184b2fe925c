//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Item catalog dataset URL
    pub catalog_url: String,
    /// Optional local catalog file, used instead of the URL when set
    pub catalog_path: Option<String>,
    /// Whether resolved item mentions become clickable references
    pub link_items: bool,
    /// Base URL of the item pages rendered links point at
    pub item_page_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog_url: env::var("CATALOG_URL")
                .unwrap_or_else(|_| "https://api.mouse.rs/items".to_string()),
            catalog_path: env::var("CATALOG_PATH").ok(),
            link_items: env::var("LINK_ITEMS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("LINK_ITEMS must be true or false")?,
            item_page_url: env::var("ITEM_PAGE_URL")
                .unwrap_or_else(|_| "https://www.mousehuntgame.com/item.php".to_string()),
        })
    }
}
