use anyhow::Result;
use campus_events_core::client_config::ClientConfig;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::commands::load_session;
use crate::render::Render;

pub async fn run(client: &Client, config: &ClientConfig) -> Result<()> {
    let session = load_session(client, config).await?;

    println!("{}", session.stats().render());
    println!(
        "{}",
        format!("You are registered for {} event(s)", session.derive_view("Registered").len())
            .dimmed()
    );

    Ok(())
}
