use anyhow::Result;
use campus_events_core::EventId;
use campus_events_core::client_config::ClientConfig;
use campus_events_core::registration::RegistrationStore;

use crate::client::Client;
use crate::render::{EventCard, Render};

pub async fn run(client: &Client, config: &ClientConfig, id: EventId) -> Result<()> {
    let event = client.get_event(id).await?;
    let registrations = config.registration_store().load();

    let card = EventCard {
        event: &event,
        registered: registrations.contains(id),
    };
    println!("{}", card.render());
    println!("   Availability: {}", event.fill_level().render());

    Ok(())
}
