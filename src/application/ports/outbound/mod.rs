//! Outbound ports - Interfaces that the application requires from external systems

mod catalog_port;
mod journal_port;
mod style_port;

pub use catalog_port::{CatalogError, ItemCatalogPort};
pub use journal_port::JournalEntryPort;
pub use style_port::StylePort;
