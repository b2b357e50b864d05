//! Derived, read-only projections over the event cache.

use serde::Serialize;

use crate::event::Event;
use crate::registration::set::RegistrationSet;

pub const ALL_CATEGORY: &str = "All";
pub const REGISTERED_CATEGORY: &str = "Registered";

/// Which tab of events the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFilter {
    /// Every event the user has not registered for
    All,
    /// Only events the user has registered for
    Registered,
    /// Unregistered events in one category (exact match)
    Category(String),
}

impl ViewFilter {
    pub fn parse(selected: &str) -> Self {
        match selected {
            ALL_CATEGORY => ViewFilter::All,
            REGISTERED_CATEGORY => ViewFilter::Registered,
            other => ViewFilter::Category(other.to_string()),
        }
    }

    /// A registered event only ever shows up under `Registered`, never in
    /// its own category tab.
    pub fn includes(&self, event: &Event, registered: &RegistrationSet) -> bool {
        let is_registered = registered.contains(event.id);
        match self {
            ViewFilter::All => !is_registered,
            ViewFilter::Registered => is_registered,
            ViewFilter::Category(category) => event.category == *category && !is_registered,
        }
    }
}

impl From<&str> for ViewFilter {
    fn from(selected: &str) -> Self {
        ViewFilter::parse(selected)
    }
}

/// `All`, then each category in first-seen order, then `Registered`.
pub fn categories(events: &[Event]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];

    for event in events {
        if !categories[1..].contains(&event.category) {
            categories.push(event.category.clone());
        }
    }

    categories.push(REGISTERED_CATEGORY.to_string());
    categories
}

/// Totals across the whole event cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_events: usize,
    pub total_capacity: u64,
    pub total_registered: u64,
}

impl CatalogStats {
    pub fn from_events(events: &[Event]) -> Self {
        events.iter().fold(CatalogStats::default(), |acc, event| CatalogStats {
            total_events: acc.total_events + 1,
            total_capacity: acc.total_capacity + u64::from(event.capacity),
            total_registered: acc.total_registered + u64::from(event.registered),
        })
    }
}
