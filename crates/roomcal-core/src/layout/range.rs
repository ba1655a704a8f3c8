//! Timeline range: the hour window a day has to display.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::layout::expand::SubEvent;

/// Row units per displayed hour (half-hour granularity).
pub const ROWS_PER_HOUR: u32 = 2;

/// Hour window `[min_hour, max_hour]` of one day, with `max_hour > min_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRange {
    /// First displayed hour.
    pub min_hour: u32,
    /// Hour the display ends at.
    pub max_hour: u32,
}

impl TimelineRange {
    /// Creates a range, rejecting empty or inverted windows.
    pub fn new(min_hour: u32, max_hour: u32) -> LayoutResult<Self> {
        if max_hour <= min_hour {
            return Err(LayoutError::DegenerateRange { min_hour, max_hour });
        }
        Ok(Self { min_hour, max_hour })
    }

    /// Number of displayed hours.
    pub fn hours(&self) -> u32 {
        self.max_hour - self.min_hour
    }

    /// Number of grid rows the window spans.
    pub fn row_count(&self) -> u32 {
        self.hours() * ROWS_PER_HOUR
    }

    /// The hours that get a label, from `min_hour` up to but excluding `max_hour`.
    pub fn hour_marks(&self) -> std::ops::Range<u32> {
        self.min_hour..self.max_hour
    }
}

/// Computes the window that contains every sub-event of one day.
///
/// The window opens at the hour of the earliest start. It closes at the
/// hour of the latest end, rounded up to the next hour when that end has a
/// non-zero minute.
///
/// # Errors
///
/// [`LayoutError::EmptyBucket`] for an empty day, and
/// [`LayoutError::DegenerateRange`] when the window would be empty, such as
/// a lone zero-length sub-event on the hour or one that runs past midnight.
pub fn timeline_range(sub_events: &[SubEvent<'_>]) -> LayoutResult<TimelineRange> {
    let earliest = sub_events.iter().map(|s| s.start).min();
    let latest = sub_events.iter().map(|s| s.end).max();
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return Err(LayoutError::EmptyBucket);
    };

    let min_hour = earliest.hour();
    let mut max_hour = latest.hour();
    if latest.minute() != 0 {
        max_hour += 1;
    }

    TimelineRange::new(min_hour, max_hour)
}
