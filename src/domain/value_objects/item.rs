//! Item catalog records and tokenized item mentions

use serde::{Deserialize, Serialize};

/// One record of the item reference catalog: a display name mapped to
/// a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single item mention pulled out of a list segment, optionally
/// resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemToken {
    /// The trimmed mention text as it appeared in the entry.
    pub text: String,
    /// Identifier of the catalog item this mention resolved to, if any.
    pub item_id: Option<String>,
}

impl ItemToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            item_id: None,
        }
    }

    pub fn linked(text: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            item_id: Some(item_id.into()),
        }
    }
}
