//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog: HTTP and file providers for the item dataset
//! - Journal feed: JSON-lines entry adapter
//! - Styles: the list stylesheet and a style sink
//! - Config: Application configuration
//! - State: Shared application state

pub mod catalog;
pub mod config;
pub mod journal_feed;
pub mod state;
pub mod styles;
