use std::collections::HashSet;

/// Handle to one journal entry as surfaced by the entry source.
///
/// The pipeline reads tags and text through this trait and writes the
/// reformatted body back through it, so classification, extraction and
/// tokenizing stay testable on plain strings with no page attached.
pub trait JournalEntryPort: Send {
    /// Snapshot of the entry's semantic tag set.
    fn tag_set(&self) -> HashSet<String>;

    /// HTML of the entry's text container, or `None` when the entry
    /// has no text container at all.
    fn text(&self) -> Option<String>;

    /// Replace the text container's contents.
    fn set_text(&mut self, html: String);

    /// Idempotency marker persisted on the entry.
    fn is_processed(&self) -> bool;

    fn mark_processed(&mut self);

    /// Tag a list already embedded in the entry with the journal list
    /// classes. A no-op when the entry has no embedded list.
    fn tag_embedded_list(&mut self);
}
