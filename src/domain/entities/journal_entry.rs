//! Journal entry - one log line recording a game event

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One journal feed entry as delivered by the game client.
///
/// Entries are created externally by the game appending to its journal
/// feed; the reformat pipeline reads and rewrites them in place, at
/// most once each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Semantic tags carried by the entry (the CSS classes on the
    /// entry element in the original feed).
    pub tags: HashSet<String>,
    /// HTML payload of the entry's text container. `None` when the
    /// entry has no text container at all.
    pub text: Option<String>,
    /// Idempotency marker, persisted on the entry so redelivery of an
    /// already-handled entry is a no-op.
    #[serde(default)]
    pub processed: bool,
}

impl JournalEntry {
    pub fn new<T, S>(tags: T, text: impl Into<String>) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            text: Some(text.into()),
            processed: false,
        }
    }

    /// An entry whose text container is missing entirely.
    pub fn without_text<T, S>(tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            text: None,
            processed: false,
        }
    }
}
