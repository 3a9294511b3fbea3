//! Info command: scrape the page and print the model inventory.

use carbot_config::Config;

use super::build_spec_book;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone, Copy)]
pub struct InfoInput {
    /// Dump the scraped records as JSON instead of a listing
    pub json: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let book = build_spec_book(&config, None).await?;

        if input.json {
            println!("{}", serde_json::to_string_pretty(&book)?);
            return Ok(());
        }

        println!("Page: {}", config.scrape.page_title);
        println!("Models scraped: {}\n", book.len());
        for name in book.model_names() {
            let coverage = book.record(name).map_or(String::new(), |record| {
                [
                    record.production.as_deref().map(|_| "production"),
                    record.engine.as_deref().map(|_| "engine"),
                    record.top_speed.as_deref().map(|_| "top speed"),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ")
            });
            println!("  {name} ({coverage})");
        }

        Ok(())
    }
}
