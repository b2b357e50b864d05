//! Error types for campus-events.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in catalog and registration operations.
#[derive(Error, Debug)]
pub enum CampusEventsError {
    #[error("Event not found.")]
    NotFound(String),

    #[error("You have already registered for this event.")]
    AlreadyRegistered(EventId),

    #[error("You are not registered for this event.")]
    NotRegistered(EventId),

    #[error("Event is full.")]
    CapacityExceeded(EventId),

    #[error("Could not persist registrations: {0}")]
    Persistence(String),

    #[error("Unable to load events. Please try again later. ({0})")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CampusEventsError {
    /// Unknown or unparseable event id.
    pub fn not_found(id: impl ToString) -> Self {
        CampusEventsError::NotFound(id.to_string())
    }

    /// Whether the failure is worth retrying from the presentation layer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CampusEventsError::Service(_))
    }
}

impl From<serde_json::Error> for CampusEventsError {
    fn from(err: serde_json::Error) -> Self {
        CampusEventsError::Serialization(err.to_string())
    }
}

/// Result type alias for campus-events operations.
pub type CampusEventsResult<T> = Result<T, CampusEventsError>;
