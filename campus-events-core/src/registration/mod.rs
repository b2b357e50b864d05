//! Client-side registration bookkeeping.
//!
//! [`RegistrationManager`] owns a cached copy of the catalog plus the
//! user's [`RegistrationSet`]. Registering bumps the cached occupancy count
//! and records the id; unregistering reverses both. Every successful
//! mutation is written through the injected [`RegistrationStore`].
//!
//! Mutating operations take `&mut self`, so the read-check-mutate-persist
//! sequence can't interleave with another call on the same manager. Share
//! one across threads behind a `Mutex`.

mod set;
mod store;
mod view;

pub use set::RegistrationSet;
pub use store::{FileStore, MemoryStore, REGISTRATIONS_KEY, RegistrationStore};
pub use view::{ALL_CATEGORY, CatalogStats, REGISTERED_CATEGORY, ViewFilter, categories};

use crate::catalog::EventCatalog;
use crate::error::{CampusEventsError, CampusEventsResult};
use crate::event::{Event, EventId};

pub struct RegistrationManager<S: RegistrationStore> {
    events: Vec<Event>,
    registered: RegistrationSet,
    store: S,
}

impl<S: RegistrationStore> RegistrationManager<S> {
    /// Restore the registration set from `store` and take `events` as the
    /// working cache.
    pub fn new(events: Vec<Event>, store: S) -> Self {
        let registered = store.load();
        tracing::debug!(
            events = events.len(),
            registrations = registered.len(),
            "registration state loaded"
        );

        RegistrationManager {
            events,
            registered,
            store,
        }
    }

    pub fn from_catalog(catalog: &EventCatalog, store: S) -> Self {
        Self::new(catalog.list_events(None), store)
    }

    /// Register for an event, taking one seat.
    ///
    /// All checks run before anything changes, so a failed call leaves both
    /// the cache and the registration set untouched.
    pub fn register(&mut self, id: EventId) -> CampusEventsResult<Event> {
        let index = self.position(id)?;

        if self.registered.contains(id) {
            return Err(CampusEventsError::AlreadyRegistered(id));
        }

        let event = &mut self.events[index];
        if event.registered >= event.capacity {
            return Err(CampusEventsError::CapacityExceeded(id));
        }

        event.registered += 1;
        self.registered.insert(id);

        let updated = self.events[index].clone();
        tracing::debug!(event_id = id, registered = updated.registered, "registered");

        self.persist();
        Ok(updated)
    }

    /// Give a seat back.
    pub fn unregister(&mut self, id: EventId) -> CampusEventsResult<Event> {
        if !self.registered.contains(id) {
            return Err(CampusEventsError::NotRegistered(id));
        }

        let index = self.position(id)?;

        let event = &mut self.events[index];
        if event.registered == 0 {
            // Local count already at zero; the cache has drifted from the catalog
            tracing::debug!(event_id = id, "occupancy already zero, clamping");
        }
        event.registered = event.registered.saturating_sub(1);
        self.registered.remove(id);

        let updated = self.events[index].clone();
        tracing::debug!(event_id = id, registered = updated.registered, "unregistered");

        self.persist();
        Ok(updated)
    }

    /// Events visible under the selected tab.
    ///
    /// `"All"` shows what the user hasn't registered for, `"Registered"`
    /// shows what they have, and any other value shows unregistered events
    /// in that exact category. Stale ids in the registration set match no
    /// event and so never appear.
    pub fn derive_view(&self, selected: &str) -> Vec<&Event> {
        self.view(&ViewFilter::parse(selected))
    }

    pub fn view(&self, filter: &ViewFilter) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| filter.includes(event, &self.registered))
            .collect()
    }

    pub fn list_categories(&self) -> Vec<String> {
        categories(&self.events)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_events(&self.events)
    }

    /// Swap in a freshly fetched event list. Registrations are kept as-is.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn is_registered(&self, id: EventId) -> bool {
        self.registered.contains(id)
    }

    pub fn event(&self, id: EventId) -> CampusEventsResult<&Event> {
        self.position(id).map(|index| &self.events[index])
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn registrations(&self) -> &RegistrationSet {
        &self.registered
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn position(&self, id: EventId) -> CampusEventsResult<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CampusEventsError::not_found(id))
    }

    // A failed write is not fatal: the in-memory state stays authoritative
    // for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.registered) {
            tracing::warn!(error = %e, "registration state not persisted");
        }
    }
}
