//! Read-only event catalog.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{CampusEventsError, CampusEventsResult};
use crate::event::{Event, EventId};

/// A fixed snapshot of events. Nothing here mutates after construction.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build a catalog, rejecting duplicate ids and events that break the
    /// capacity invariant.
    pub fn new(events: Vec<Event>) -> CampusEventsResult<Self> {
        let mut seen = HashSet::new();

        for event in &events {
            if !seen.insert(event.id) {
                return Err(CampusEventsError::Config(format!(
                    "Duplicate event id {}",
                    event.id
                )));
            }
            if event.capacity == 0 {
                return Err(CampusEventsError::Config(format!(
                    "Event {} has zero capacity",
                    event.id
                )));
            }
            if event.registered > event.capacity {
                return Err(CampusEventsError::Config(format!(
                    "Event {} has {} registered but capacity {}",
                    event.id, event.registered, event.capacity
                )));
            }
        }

        Ok(EventCatalog { events })
    }

    /// Load a catalog snapshot from a JSON array of events.
    pub fn from_json_file(path: &Path) -> CampusEventsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CampusEventsError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        let events: Vec<Event> = serde_json::from_str(&content).map_err(|e| {
            CampusEventsError::Config(format!("Invalid catalog {}: {e}", path.display()))
        })?;

        Self::new(events)
    }

    /// Events matching `category` (case-insensitive), or all of them.
    pub fn list_events(&self, category: Option<&str>) -> Vec<Event> {
        match category {
            Some(category) => self
                .events
                .iter()
                .filter(|e| e.in_category(category))
                .cloned()
                .collect(),
            None => self.events.clone(),
        }
    }

    pub fn get_event(&self, id: EventId) -> CampusEventsResult<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CampusEventsError::not_found(id))
    }

    /// Parse an id from a path segment. Anything that isn't a number can't
    /// name an event, so it is reported as not found.
    pub fn parse_id(raw: &str) -> CampusEventsResult<EventId> {
        raw.trim()
            .parse::<EventId>()
            .map_err(|_| CampusEventsError::not_found(raw))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The built-in campus dataset.
    pub fn seeded() -> Self {
        EventCatalog {
            events: seed_events(),
        }
    }
}

fn seed_event(
    id: EventId,
    title: &str,
    (year, month, day): (i32, u32, u32),
    time: &str,
    location: &str,
    description: &str,
    category: &str,
    (capacity, registered): (u32, u32),
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: time.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        capacity,
        registered,
    }
}

fn seed_events() -> Vec<Event> {
    vec![
        seed_event(
            1,
            "AWS Student Community Day",
            (2025, 2, 10),
            "9:00 AM - 5:00 PM",
            "Main Auditorium",
            "A full-day cloud learning event with hands-on workshops, tech talks, and networking opportunities with AWS professionals.",
            "Workshop",
            (200, 156),
        ),
        seed_event(
            2,
            "Cloud Innovation Hackathon",
            (2025, 2, 15),
            "10:00 AM - 8:00 PM",
            "Engineering Building, Lab 301",
            "24-hour hackathon focused on building cloud-native applications. Win prizes and get mentorship from industry experts.",
            "Hackathon",
            (100, 87),
        ),
        seed_event(
            3,
            "Tech Talk: Serverless Architecture Best Practices",
            (2025, 2, 18),
            "4:00 PM - 5:30 PM",
            "Virtual Event",
            "Learn about serverless architecture patterns, AWS Lambda, and building scalable applications without managing servers.",
            "Tech Talk",
            (300, 213),
        ),
        seed_event(
            4,
            "Spring Career Fair - Tech Companies",
            (2025, 2, 22),
            "11:00 AM - 4:00 PM",
            "Student Center, Main Hall",
            "Meet recruiters from leading tech companies. Bring your resume and be ready to discuss internship and full-time opportunities.",
            "Career",
            (500, 342),
        ),
        seed_event(
            5,
            "Containers & Kubernetes Workshop",
            (2025, 2, 25),
            "2:00 PM - 5:00 PM",
            "Computer Lab B",
            "Hands-on workshop covering Docker containers, container orchestration with Kubernetes, and deploying to Amazon ECS.",
            "Workshop",
            (50, 48),
        ),
        seed_event(
            6,
            "AI/ML Study Group Meetup",
            (2025, 3, 1),
            "6:00 PM - 8:00 PM",
            "Library Meeting Room 4",
            "Weekly meetup for students interested in artificial intelligence and machine learning. Share projects and learn together.",
            "Study Group",
            (30, 22),
        ),
    ]
}
