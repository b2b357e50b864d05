use anyhow::Result;
use campus_events_core::client_config::ClientConfig;
use campus_events_core::registration::ViewFilter;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::commands::load_session;

pub async fn run(client: &Client, config: &ClientConfig) -> Result<()> {
    let session = load_session(client, config).await?;

    for tab in session.list_categories() {
        let count = session.view(&ViewFilter::parse(&tab)).len();
        println!("{} {}", tab, format!("({})", count).dimmed());
    }

    Ok(())
}
