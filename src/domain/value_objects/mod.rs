//! Value objects - Immutable objects defined by their attributes

mod category;
mod extraction;
mod item;

pub use category::{Category, CATEGORY_TAGS, SKIP_TAGS};
pub use extraction::{Extraction, OTHER_PHRASES};
pub use item::{CatalogItem, ItemToken};
