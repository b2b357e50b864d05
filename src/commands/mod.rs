pub mod categories;
pub mod events;
pub mod register;
pub mod show;
pub mod stats;
pub mod unregister;

use campus_events_core::client_config::ClientConfig;
use campus_events_core::registration::{FileStore, RegistrationManager};
use campus_events_core::CampusEventsResult;

use crate::client::Client;

/// Fetch the catalog and restore this user's registrations on top of it.
pub async fn load_session(
    client: &Client,
    config: &ClientConfig,
) -> CampusEventsResult<RegistrationManager<FileStore>> {
    let events = client.list_events(None).await?;
    Ok(RegistrationManager::new(events, config.registration_store()))
}
