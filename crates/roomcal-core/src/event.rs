//! Event types for the room calendar.
//!
//! This module provides the immutable input records of the layout engine:
//! - [`Event`]: a named event with tentative and confirmed allocations
//! - [`Allocation`]: one room booking for a time span
//! - [`AllocationKind`]: whether a booking is tentative or confirmed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an allocation is tentative or confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKind {
    /// Pencilled in, may still move.
    Tentative,
    /// Booked.
    Confirmed,
}

impl AllocationKind {
    /// Returns true for tentative allocations.
    pub fn is_provisional(&self) -> bool {
        matches!(self, Self::Tentative)
    }
}

/// A room booking: `(room, start, end)`.
///
/// `start < end` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Identifier of the room track the booking belongs to.
    pub room: String,
    /// Start instant.
    pub start: DateTime<Utc>,
    /// End instant.
    pub end: DateTime<Utc>,
}

impl Allocation {
    /// Creates a new allocation.
    pub fn new(room: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            room: room.into(),
            start,
            end,
        }
    }
}

/// An event as supplied by the upstream data source.
///
/// Either allocation list may be empty. `details` holds the event's raw
/// column values in the order of the payload's column names; the layout
/// engine never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name.
    pub name: String,
    /// Language the event is held in.
    pub language: String,
    /// Tentative allocations, in payload order.
    pub tentative: Vec<Allocation>,
    /// Confirmed allocations, in payload order.
    pub confirmed: Vec<Allocation>,
    /// Raw column values for the detail view.
    pub details: Vec<serde_json::Value>,
}

impl Event {
    /// Creates an event with no allocations and no details.
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            tentative: Vec::new(),
            confirmed: Vec::new(),
            details: Vec::new(),
        }
    }

    /// Builder method to add a tentative allocation.
    pub fn with_tentative(mut self, allocation: Allocation) -> Self {
        self.tentative.push(allocation);
        self
    }

    /// Builder method to add a confirmed allocation.
    pub fn with_confirmed(mut self, allocation: Allocation) -> Self {
        self.confirmed.push(allocation);
        self
    }

    /// Builder method to set detail values.
    pub fn with_details(mut self, details: Vec<serde_json::Value>) -> Self {
        self.details = details;
        self
    }

    /// Total number of allocations across both lists.
    pub fn allocation_count(&self) -> usize {
        self.tentative.len() + self.confirmed.len()
    }

    /// Iterates all allocations, tentative first, tagged with their kind.
    pub fn allocations(&self) -> impl Iterator<Item = (AllocationKind, &Allocation)> {
        self.tentative
            .iter()
            .map(|a| (AllocationKind::Tentative, a))
            .chain(self.confirmed.iter().map(|a| (AllocationKind::Confirmed, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn allocation_kind_provisional() {
        assert!(AllocationKind::Tentative.is_provisional());
        assert!(!AllocationKind::Confirmed.is_provisional());
    }

    #[test]
    fn builder_collects_allocations() {
        let event = Event::new("Workshop", "en")
            .with_confirmed(Allocation::new("132", utc(2025, 5, 2, 9, 0), utc(2025, 5, 2, 10, 0)))
            .with_tentative(Allocation::new("131", utc(2025, 5, 1, 9, 0), utc(2025, 5, 1, 10, 0)))
            .with_tentative(Allocation::new("133", utc(2025, 5, 3, 9, 0), utc(2025, 5, 3, 10, 0)));

        assert_eq!(event.allocation_count(), 3);
        let rooms: Vec<_> = event
            .allocations()
            .map(|(kind, a)| (kind, a.room.as_str()))
            .collect();
        assert_eq!(
            rooms,
            vec![
                (AllocationKind::Tentative, "131"),
                (AllocationKind::Tentative, "133"),
                (AllocationKind::Confirmed, "132"),
            ]
        );
    }

    #[test]
    fn empty_event_has_no_allocations() {
        let event = Event::new("Placeholder", "de");
        assert_eq!(event.allocation_count(), 0);
        assert_eq!(event.allocations().count(), 0);
    }
}
