//! The reformat pipeline: classify, extract, tokenize, render

use std::sync::Arc;

use tracing::{debug, trace};

use crate::application::ports::outbound::JournalEntryPort;
use crate::application::services::ItemCatalogService;
use crate::domain::services::{classifier, extractor, list_markup, tokenizer};
use crate::domain::value_objects::{Category, ItemToken};

/// Terminal state an entry reached. Every entry reaches exactly one of
/// these per delivery, and only `Rendered` and `TaggedInPlace` mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The entry already carried the processed marker.
    AlreadyProcessed,
    /// The entry carried a skip-listed tag or had no text container.
    Skipped,
    /// The entry shipped its own list, which was tagged in place.
    TaggedInPlace,
    /// No extraction rule matched; the entry text was left as-is.
    NoMatch,
    /// The entry was rewritten as narrative plus an item list.
    Rendered,
}

/// Orchestrates classify, extract, tokenize and render for each newly
/// surfaced journal entry.
pub struct ReformatService {
    catalog: Arc<ItemCatalogService>,
    link_items: bool,
    item_page_url: String,
}

impl ReformatService {
    pub fn new(
        catalog: Arc<ItemCatalogService>,
        link_items: bool,
        item_page_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            link_items,
            item_page_url: item_page_url.into(),
        }
    }

    /// Process one delivered journal entry.
    ///
    /// The processed marker is set right after the idempotency check,
    /// before any other work, so redelivered entries and entries that
    /// end in a miss are never retried. Every miss leaves the entry
    /// text untouched.
    pub async fn process(&self, entry: &mut dyn JournalEntryPort) -> ProcessOutcome {
        if entry.is_processed() {
            return ProcessOutcome::AlreadyProcessed;
        }
        entry.mark_processed();

        let tags = entry.tag_set();
        if classifier::is_skipped(&tags) {
            debug!("entry carries a skip-listed tag, leaving as-is");
            return ProcessOutcome::Skipped;
        }

        let Some(text) = entry.text() else {
            debug!("entry has no text container, leaving as-is");
            return ProcessOutcome::Skipped;
        };

        let category = classifier::classify(&tags);
        if category == Category::HasListNeedsClasses {
            entry.tag_embedded_list();
            return ProcessOutcome::TaggedInPlace;
        }

        let Some(extraction) = extractor::extract(category, &text) else {
            trace!(?category, "no extraction rule matched");
            return ProcessOutcome::NoMatch;
        };

        let tokens = self
            .resolve_tokens(tokenizer::split_segment(&extraction.segment))
            .await;
        if tokens.is_empty() || extraction.remainder == text {
            return ProcessOutcome::NoMatch;
        }

        let list = list_markup::render_list(&tokens, &self.item_page_url);
        entry.set_text(format!("{}{list}", extraction.remainder));
        debug!(?category, items = tokens.len(), "reformatted entry as item list");
        ProcessOutcome::Rendered
    }

    /// Turn raw mentions into tokens, resolving each against the
    /// catalog when item linking is enabled. Mentions that already
    /// carry an anchor pass through untouched.
    async fn resolve_tokens(&self, mentions: Vec<String>) -> Vec<ItemToken> {
        let mut tokens = Vec::with_capacity(mentions.len());
        for mention in mentions {
            if !self.link_items || mention.contains("<a") {
                tokens.push(ItemToken::plain(mention));
                continue;
            }
            let name = tokenizer::strip_quantity(&mention);
            match self.catalog.resolve(name).await {
                Some(item) => tokens.push(ItemToken::linked(mention, item.identifier)),
                None => tokens.push(ItemToken::plain(mention)),
            }
        }
        tokens
    }
}
