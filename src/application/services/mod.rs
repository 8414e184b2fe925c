//! Application services

mod item_catalog_service;
mod reformat_service;

pub use item_catalog_service::ItemCatalogService;
pub use reformat_service::{ProcessOutcome, ReformatService};
