use anyhow::Result;
use campus_events_core::client_config::ClientConfig;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::commands::load_session;
use crate::render::{CategoryTabs, EventCard, Render};

pub async fn run(client: &Client, config: &ClientConfig, category: &str) -> Result<()> {
    let session = load_session(client, config).await?;

    let tabs = session.list_categories();
    println!("{}", CategoryTabs { tabs: &tabs, selected: category }.render());
    println!();

    let events = session.derive_view(category);

    if events.is_empty() {
        println!("{}", "No events found".bold());
        println!("{}", "No events available in this category.".dimmed());
    } else {
        for event in events {
            let card = EventCard {
                event,
                registered: session.is_registered(event.id),
            };
            println!("{}", card.render());
            println!();
        }
    }

    println!("{}", session.stats().render().dimmed());

    Ok(())
}
