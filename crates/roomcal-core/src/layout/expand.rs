//! Allocation expansion: one placeable sub-event per allocation.

use chrono::{DateTime, FixedOffset};

use crate::event::{AllocationKind, Event};
use crate::time::DisplayZone;

/// One allocation of an event, ready to be placed on a day timeline.
///
/// Borrows its parent event and room id; it lives only as long as the
/// layout run that produced it. `start` and `end` are display-zone times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubEvent<'a> {
    /// The event this allocation belongs to.
    pub event: &'a Event,
    /// Room track id.
    pub room: &'a str,
    /// Start, in the display zone.
    pub start: DateTime<FixedOffset>,
    /// End, in the display zone.
    pub end: DateTime<FixedOffset>,
    /// True when drawn from the tentative list.
    pub provisional: bool,
}

impl SubEvent<'_> {
    /// The allocation kind this sub-event was expanded from.
    pub fn kind(&self) -> AllocationKind {
        if self.provisional {
            AllocationKind::Tentative
        } else {
            AllocationKind::Confirmed
        }
    }
}

/// Expands one event: tentative allocations first, then confirmed ones.
///
/// Nothing is dropped, merged or deduplicated.
pub fn expand_event(event: &Event, zone: DisplayZone) -> impl Iterator<Item = SubEvent<'_>> {
    event.allocations().map(move |(kind, allocation)| SubEvent {
        event,
        room: allocation.room.as_str(),
        start: zone.localize(allocation.start),
        end: zone.localize(allocation.end),
        provisional: kind.is_provisional(),
    })
}

/// Expands every event, concatenating per-event sequences in list order.
pub fn expand_events(events: &[Event], zone: DisplayZone) -> Vec<SubEvent<'_>> {
    let expanded: Vec<_> = events
        .iter()
        .flat_map(|event| expand_event(event, zone))
        .collect();
    tracing::debug!(
        events = events.len(),
        sub_events = expanded.len(),
        "expanded allocations"
    );
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Allocation;
    use chrono::{TimeZone, Timelike, Utc};

    fn alloc(room: &str, day: u32, hour: u32) -> Allocation {
        Allocation::new(
            room,
            Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 5, day, hour + 1, 0, 0).unwrap(),
        )
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("Opening", "en")
                .with_tentative(alloc("131", 1, 9))
                .with_confirmed(alloc("132", 1, 11))
                .with_tentative(alloc("133", 2, 9)),
            Event::new("Nothing booked", "fr"),
            Event::new("Closing", "de")
                .with_confirmed(alloc("upcoming", 3, 15))
                .with_confirmed(alloc("upcoming", 3, 15)),
        ]
    }

    #[test]
    fn count_matches_allocation_total() {
        let events = sample_events();
        let expanded = expand_events(&events, DisplayZone::utc());
        let total: usize = events.iter().map(Event::allocation_count).sum();
        assert_eq!(expanded.len(), total);
        assert_eq!(expanded.len(), 5);
    }

    #[test]
    fn tentative_precede_confirmed_per_event() {
        let events = sample_events();
        let expanded = expand_events(&events, DisplayZone::utc());
        let opening: Vec<_> = expanded
            .iter()
            .filter(|s| s.event.name == "Opening")
            .map(|s| (s.room, s.provisional))
            .collect();
        assert_eq!(opening, vec![("131", true), ("133", true), ("132", false)]);
    }

    #[test]
    fn event_order_is_preserved() {
        let events = sample_events();
        let names: Vec<_> = expand_events(&events, DisplayZone::utc())
            .iter()
            .map(|s| s.event.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Opening", "Opening", "Opening", "Closing", "Closing"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let events = sample_events();
        let closing: Vec<_> = expand_event(&events[2], DisplayZone::utc()).collect();
        assert_eq!(closing.len(), 2);
        assert_eq!(closing[0], closing[1]);
        assert_eq!(closing[0].kind(), AllocationKind::Confirmed);
    }

    #[test]
    fn event_without_allocations_expands_to_nothing() {
        let events = sample_events();
        assert_eq!(expand_event(&events[1], DisplayZone::utc()).count(), 0);
    }

    #[test]
    fn times_are_localized() {
        let events = sample_events();
        let zone = DisplayZone::default();
        let first = expand_event(&events[0], zone).next().unwrap();
        assert_eq!(first.start.hour(), 14);
        assert_eq!(first.start.minute(), 30);
        assert!(std::ptr::eq(first.event, &events[0]));
    }
}
