#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{ChatInput, ChatStrategy, CommandStrategy, InfoInput, InfoStrategy, InitStrategy, VersionStrategy};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "carbot")]
#[command(about = "Lamborghini spec assistant over a scraped Wikipedia page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the page and answer queries interactively
    Chat {
        /// Single query to answer (non-interactive mode)
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Page title to scrape instead of the configured one
        #[arg(short = 'p', long)]
        page: Option<String>,
    },
    /// Scrape the page and print the model inventory
    Info {
        /// Dump the scraped records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { message, page } => {
            ChatStrategy.execute(ChatInput { message, page }).await?;
        }
        Commands::Info { json } => {
            InfoStrategy.execute(InfoInput { json }).await?;
        }
        Commands::Init => {
            InitStrategy.execute(()).await?;
        }
        Commands::Version => {
            VersionStrategy.execute(()).await?;
        }
    }

    Ok(())
}
