//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with a typed input, so
//! dispatch is monomorphized and adding a command means implementing
//! one trait.

use anyhow::Context;
use carbot_config::Config;
use carbot_core::SpecBook;
use carbot_scrape::{PageSource, WikiFetcher, scrape_spec_book};
use tracing::{info, warn};

mod chat;
mod info;
mod init;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Fetch and scrape the configured page into a spec book.
///
/// Fetch failure is the one fatal condition: without data there is
/// nothing to answer, so the error propagates and aborts startup. An
/// empty scrape result is only a warning; the caller still gets a book
/// and every query answers "not found".
pub async fn build_spec_book(config: &Config, page_override: Option<&str>) -> anyhow::Result<SpecBook> {
    let title = page_override.unwrap_or(&config.scrape.page_title);

    let fetcher =
        WikiFetcher::new(config.fetch.clone()).context("Failed to create page fetcher")?;
    let html = fetcher
        .page_html(title)
        .await
        .with_context(|| format!("Failed to fetch page '{title}'"))?;

    let book = scrape_spec_book(&html);
    if book.is_empty() {
        warn!("No model rows scraped from '{}'; every query will answer not-found", title);
    } else {
        info!("Spec book ready: {} models", book.len());
    }

    Ok(book)
}
