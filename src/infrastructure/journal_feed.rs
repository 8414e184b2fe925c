//! JSON-lines journal feed adapter
//!
//! Each feed line is one journal entry record (tag set, text payload,
//! processed marker). The adapter wraps the record in the entry port
//! so the pipeline can rewrite it in place, then hands it back for
//! re-emission.

use std::collections::HashSet;

use crate::application::ports::outbound::JournalEntryPort;
use crate::domain::entities::JournalEntry;
use crate::domain::services::list_markup;

/// Entry-port adapter over an owned journal entry record.
pub struct JsonJournalEntry {
    entry: JournalEntry,
}

impl JsonJournalEntry {
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        Ok(Self {
            entry: serde_json::from_str(line)?,
        })
    }

    pub fn into_inner(self) -> JournalEntry {
        self.entry
    }
}

impl JournalEntryPort for JsonJournalEntry {
    fn tag_set(&self) -> HashSet<String> {
        self.entry.tags.clone()
    }

    fn text(&self) -> Option<String> {
        self.entry.text.clone()
    }

    fn set_text(&mut self, html: String) {
        self.entry.text = Some(html);
    }

    fn is_processed(&self) -> bool {
        self.entry.processed
    }

    fn mark_processed(&mut self) {
        self.entry.processed = true;
    }

    fn tag_embedded_list(&mut self) {
        if let Some(text) = &self.entry.text {
            if let Some(tagged) = list_markup::tag_existing_list(text) {
                self.entry.text = Some(tagged);
            }
        }
    }
}
