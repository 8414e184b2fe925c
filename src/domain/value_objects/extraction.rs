//! Extraction results and the generic phrase table

/// Result of splitting an entry's text into its narrative prose and
/// the raw item list embedded after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Narrative text that replaces the entry body.
    pub remainder: String,
    /// Raw text of the embedded item list, not yet tokenized.
    pub segment: String,
}

/// Lead-in phrases for entries without a dedicated extraction rule,
/// tried as exact substrings in this order; the first hit wins.
pub const OTHER_PHRASES: &[&str] = &[
    "the following loot</b>",
    "Inside my chest was",
    "Inside I found",
    "I found",
    "I found</b>",
    "Inside, I found</b>",
    "Loyalty Chest and received:",
    "I sifted through my Dragon Nest and found</b>",
    "my Skyfarer's Oculus and discovered the following loot:",
    "my Skyfarer's Oculus and discovered:",
];
