use anyhow::Result;
use campus_events_core::EventId;
use campus_events_core::client_config::ClientConfig;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::commands::load_session;

pub async fn run(client: &Client, config: &ClientConfig, id: EventId) -> Result<()> {
    let mut session = load_session(client, config).await?;

    let event = session.unregister(id)?;

    println!(
        "{} {} {}",
        "Unregistered".yellow().bold(),
        event.title,
        format!("({} / {})", event.registered, event.capacity).dimmed()
    );

    Ok(())
}
