//! Better Journal - reformats game journal feed entries into structured item lists
//!
//! Reads journal entries as JSON lines on stdin (one entry per line,
//! carrying the entry's tag set, text payload, and processed marker),
//! runs each through the reformat pipeline, and writes the possibly
//! rewritten records back out as JSON lines on stdout.

mod application;
mod domain;
mod infrastructure;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::journal_feed::JsonJournalEntry;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging; stdout is reserved for the rewritten feed
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "better_journal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Better Journal");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    match &config.catalog_path {
        Some(path) => tracing::info!("  Catalog: {path}"),
        None => tracing::info!("  Catalog: {}", config.catalog_url),
    }
    tracing::info!("  Item links: {}", config.link_items);

    let state = AppState::new(config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let mut entry = match JsonJournalEntry::parse(&line) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping malformed journal entry: {e}");
                continue;
            }
        };

        let outcome = state.reformat_service.process(&mut entry).await;
        tracing::debug!(?outcome, "entry handled");

        println!("{}", serde_json::to_string(&entry.into_inner())?);
    }

    tracing::info!("Journal feed closed");
    Ok(())
}
