//! Campus event record.
//!
//! `Event` is what the catalog serves and what the client caches. Only
//! `registered` ever changes after load, and only through the registration
//! manager.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an event within a catalog.
pub type EventId = u64;

/// A campus event with a fixed capacity and a running registration count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Free-form time range, e.g. "9:00 AM - 5:00 PM"
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub capacity: u32,
    pub registered: u32,
}

/// How close an event is to its capacity ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillLevel {
    /// Under 70% full
    Low,
    /// 70% full or more
    Medium,
    /// 90% full or more
    High,
}

impl Event {
    pub fn available_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }

    pub fn is_full(&self) -> bool {
        self.registered >= self.capacity
    }

    pub fn percent_full(&self) -> f64 {
        if self.capacity == 0 {
            return 100.0;
        }
        f64::from(self.registered) / f64::from(self.capacity) * 100.0
    }

    pub fn fill_level(&self) -> FillLevel {
        let percent = self.percent_full();
        if percent >= 90.0 {
            FillLevel::High
        } else if percent >= 70.0 {
            FillLevel::Medium
        } else {
            FillLevel::Low
        }
    }

    /// Case-insensitive category comparison, as used by the catalog filter.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Date in long form, e.g. "Monday, February 10, 2025"
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
