//! Day grouping: buckets sub-events by calendar day for one month.

use chrono::Datelike;

use crate::error::{LayoutError, LayoutResult};
use crate::layout::expand::SubEvent;
use crate::time::days_in_month;

/// Sub-events of one month, bucketed by day of month.
///
/// Bucket `0` exists only so that day numbers index directly; it is always
/// empty. Within a bucket, sub-events keep their expansion order.
#[derive(Debug, Clone)]
pub struct DayBuckets<'a> {
    year: i32,
    month: u32,
    buckets: Vec<Vec<SubEvent<'a>>>,
}

impl<'a> DayBuckets<'a> {
    /// The year the buckets were built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month (1-12) the buckets were built for.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        (self.buckets.len() - 1) as u32
    }

    /// Sub-events attributed to `day`; empty for days outside the month.
    pub fn day(&self, day: u32) -> &[SubEvent<'a>] {
        if day == 0 {
            return &[];
        }
        self.buckets
            .get(day as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates `(day, bucket)` for every day of the month, starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[SubEvent<'a>])> {
        self.buckets
            .iter()
            .enumerate()
            .skip(1)
            .map(|(day, bucket)| (day as u32, bucket.as_slice()))
    }

    /// Total number of sub-events across all days.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns true if no sub-event was attributed to the month.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns true if `sub_event` is counted as part of `year`/`month`.
///
/// The start must fall in `year`, the start month must not precede `month`
/// and the end month must not follow it. Sub-events running past midnight
/// inside the month are kept and attributed to their start day.
fn belongs_to_month(sub_event: &SubEvent<'_>, year: i32, month: u32) -> bool {
    sub_event.start.year() == year
        && sub_event.start.month() >= month
        && sub_event.end.month() <= month
}

/// Buckets sub-events into the days of `year`/`month`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidMonth`] for a month that does not exist and
/// [`LayoutError::DayOutOfRange`] when an accepted sub-event starts on a day
/// the month does not have. Both abort the whole grouping.
pub fn group_by_day<'a>(
    year: i32,
    month: u32,
    sub_events: impl IntoIterator<Item = SubEvent<'a>>,
) -> LayoutResult<DayBuckets<'a>> {
    let days = days_in_month(year, month).ok_or(LayoutError::InvalidMonth { year, month })?;
    let mut buckets: Vec<Vec<SubEvent<'a>>> = vec![Vec::new(); days as usize + 1];

    for sub_event in sub_events {
        if !belongs_to_month(&sub_event, year, month) {
            continue;
        }

        let day = sub_event.start.day();
        let bucket = buckets
            .get_mut(day as usize)
            .ok_or_else(|| LayoutError::DayOutOfRange {
                event: sub_event.event.name.clone(),
                day,
                year,
                month,
                days_in_month: days,
            })?;
        bucket.push(sub_event);
    }

    let grouped = DayBuckets {
        year,
        month,
        buckets,
    };
    tracing::debug!(year, month, sub_events = grouped.len(), "grouped sub-events by day");
    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Allocation, Event};
    use crate::layout::expand::expand_events;
    use crate::time::DisplayZone;
    use chrono::{DateTime, TimeZone, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn booked(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::new(name, "en").with_confirmed(Allocation::new("131", start, end))
    }

    fn group(events: &[Event], year: i32, month: u32) -> LayoutResult<DayBuckets<'_>> {
        group_by_day(year, month, expand_events(events, DisplayZone::utc()))
    }

    #[test]
    fn buckets_are_sized_by_month() {
        let events: Vec<Event> = Vec::new();
        let buckets = group(&events, 2024, 2).unwrap();
        assert_eq!(buckets.days_in_month(), 29);
        assert_eq!(buckets.iter().count(), 29);
        assert!(buckets.is_empty());
    }

    #[test]
    fn places_by_start_day() {
        let events = vec![
            booked("A", utc(2025, 5, 3, 9, 0), utc(2025, 5, 3, 10, 0)),
            booked("B", utc(2025, 5, 31, 9, 0), utc(2025, 5, 31, 10, 0)),
            booked("C", utc(2025, 5, 3, 7, 0), utc(2025, 5, 3, 8, 0)),
        ];
        let buckets = group(&events, 2025, 5).unwrap();

        let day3: Vec<_> = buckets.day(3).iter().map(|s| s.event.name.as_str()).collect();
        assert_eq!(day3, vec!["A", "C"]);
        assert_eq!(buckets.day(31).len(), 1);
        assert!(buckets.day(0).is_empty());
        assert!(buckets.day(32).is_empty());
    }

    #[test]
    fn filters_other_years_and_months() {
        let events = vec![
            booked("last year", utc(2024, 5, 3, 9, 0), utc(2024, 5, 3, 10, 0)),
            booked("previous month", utc(2025, 4, 3, 9, 0), utc(2025, 4, 3, 10, 0)),
            booked("next month", utc(2025, 6, 3, 9, 0), utc(2025, 6, 3, 10, 0)),
            booked("crosses into June", utc(2025, 5, 31, 22, 0), utc(2025, 6, 1, 2, 0)),
            booked("kept", utc(2025, 5, 3, 9, 0), utc(2025, 5, 3, 10, 0)),
        ];
        let buckets = group(&events, 2025, 5).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.day(3)[0].event.name, "kept");
        for (_, bucket) in buckets.iter() {
            assert!(bucket.iter().all(|s| s.start.year() == 2025));
        }
    }

    #[test]
    fn overnight_within_month_stays_on_start_day() {
        let events = vec![booked(
            "late show",
            utc(2025, 5, 10, 22, 0),
            utc(2025, 5, 11, 1, 0),
        )];
        let buckets = group(&events, 2025, 5).unwrap();
        assert_eq!(buckets.day(10).len(), 1);
        assert!(buckets.day(11).is_empty());
    }

    #[test]
    fn no_sub_event_lands_in_two_buckets() {
        let events = vec![
            booked("A", utc(2025, 5, 3, 9, 0), utc(2025, 5, 4, 10, 0)),
            booked("B", utc(2025, 5, 4, 9, 0), utc(2025, 5, 4, 10, 0)),
        ];
        let buckets = group(&events, 2025, 5).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.day(3).len(), 1);
        assert_eq!(buckets.day(4).len(), 1);
    }

    #[test]
    fn start_past_month_end_is_a_consistency_error() {
        // Starts on May 31 and "ends" in April: the month filter accepts it
        // for April, which has no day 31.
        let events = vec![booked(
            "Gala",
            utc(2025, 5, 31, 10, 0),
            utc(2025, 4, 30, 11, 0),
        )];
        let err = group(&events, 2025, 4).unwrap_err();
        assert_eq!(
            err,
            LayoutError::DayOutOfRange {
                event: "Gala".to_string(),
                day: 31,
                year: 2025,
                month: 4,
                days_in_month: 30,
            }
        );
    }

    #[test]
    fn invalid_month_is_rejected() {
        let events: Vec<Event> = Vec::new();
        assert_eq!(
            group(&events, 2025, 13).unwrap_err(),
            LayoutError::InvalidMonth {
                year: 2025,
                month: 13
            }
        );
    }
}
