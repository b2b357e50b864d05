use std::sync::Arc;

use campus_events_core::EventCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<EventCatalog>,
}

impl AppState {
    pub fn new(catalog: EventCatalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }
}
