mod client;
mod commands;
mod render;

use anyhow::Result;
use campus_events_core::client_config::ClientConfig;
use campus_events_core::registration::ALL_CATEGORY;
use campus_events_core::{CampusEventsError, EventId};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use crate::client::Client;

#[derive(Parser)]
#[command(name = "campus-events")]
#[command(about = "Browse campus events and manage your registrations")]
struct Cli {
    /// Events API base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events under a category tab
    Events {
        /// "All", "Registered", or a category name
        #[arg(short, long, default_value = ALL_CATEGORY)]
        category: String,
    },
    /// Show a single event
    Show { id: EventId },
    /// List category tabs with event counts
    Categories,
    /// Register for an event
    Register { id: EventId },
    /// Give up your seat at an event
    Unregister { id: EventId },
    /// Totals across all events
    Stats,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{} {}", "error:".red().bold(), err);

        let retryable = err
            .downcast_ref::<CampusEventsError>()
            .is_some_and(CampusEventsError::is_retryable);
        if retryable {
            eprintln!("{}", "Check that the events server is running, then try again.".dimmed());
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let client = Client::new(&config.api_url)?;

    match cli.command {
        Commands::Events { category } => commands::events::run(&client, &config, &category).await,
        Commands::Show { id } => commands::show::run(&client, &config, id).await,
        Commands::Categories => commands::categories::run(&client, &config).await,
        Commands::Register { id } => commands::register::run(&client, &config, id).await,
        Commands::Unregister { id } => commands::unregister::run(&client, &config, id).await,
        Commands::Stats => commands::stats::run(&client, &config).await,
    }
}
