//! Interactive chat command: scrape once, then read-eval-print.

use carbot_chat::{ChatLoop, Reply};
use carbot_config::Config;
use tracing::info;

use super::build_spec_book;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single query to answer (non-interactive mode)
    pub message: Option<String>,
    /// Optional page title override
    pub page: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let book = build_spec_book(&config, input.page.as_deref()).await?;
        let chat = ChatLoop::new(book);

        if let Some(message) = input.message {
            // Single query mode
            match chat.respond(&message) {
                Reply::Answer(text) => println!("{text}"),
                Reply::Farewell => {}
            }
        } else {
            chat.run_interactive()?;
            info!("Session ended");
        }

        Ok(())
    }
}
