//! Entities - objects with identity and a lifecycle

mod journal_entry;

pub use journal_entry::JournalEntry;
