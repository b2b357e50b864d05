//! The set of event ids a user has registered for.

use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// Registered event ids, kept in the order they were added.
///
/// Serializes as a plain JSON array of ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EventId>", into = "Vec<EventId>")]
pub struct RegistrationSet {
    ids: Vec<EventId>,
}

impl RegistrationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns false if the id was already present.
    pub fn insert(&mut self, id: EventId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns false if the id was not present.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&existing| existing != id);
        self.ids.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// Duplicates in stored data collapse to their first occurrence
impl From<Vec<EventId>> for RegistrationSet {
    fn from(ids: Vec<EventId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<RegistrationSet> for Vec<EventId> {
    fn from(set: RegistrationSet) -> Self {
        set.ids
    }
}

impl FromIterator<EventId> for RegistrationSet {
    fn from_iter<I: IntoIterator<Item = EventId>>(iter: I) -> Self {
        let mut set = RegistrationSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
