//! Core types for campus-events.
//!
//! This crate provides what both the server and the terminal client share:
//! - `Event` and the read-only `EventCatalog`
//! - `registration` for client-side registration state and its persistence
//! - `ClientConfig` for the client's configuration file

pub mod catalog;
pub mod client_config;
pub mod error;
pub mod event;
pub mod registration;

pub use catalog::EventCatalog;
pub use error::{CampusEventsError, CampusEventsResult};
pub use event::{Event, EventId, FillLevel};
