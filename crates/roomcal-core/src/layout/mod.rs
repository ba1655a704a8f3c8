//! Timeline layout for one month of room bookings.
//!
//! The pipeline runs strictly forward:
//! 1. [`expand`]: events become one [`SubEvent`] per allocation
//! 2. [`group`]: sub-events are bucketed by day of the target month
//! 3. [`range`]: each non-empty day gets a [`TimelineRange`]
//! 4. [`rows`]: each sub-event gets a [`RowPosition`] within its day
//!
//! [`build_month_layout`] runs all four and returns a [`MonthLayout`] that
//! borrows the input events. Nothing is cached between runs.

pub mod expand;
pub mod group;
pub mod range;
pub mod rows;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{LayoutError, LayoutResult};
use crate::event::Event;
use crate::room::{RoomTrack, default_rooms};
use crate::time::DisplayZone;

pub use expand::{SubEvent, expand_event, expand_events};
pub use group::{DayBuckets, group_by_day};
pub use range::{ROWS_PER_HOUR, TimelineRange, timeline_range};
pub use rows::{RowPosition, map_rows, row_for};

/// Everything a layout run needs besides the events themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    /// Zone used to read dates and clock times.
    pub zone: DisplayZone,
    /// Room tracks, in display order.
    pub rooms: Vec<RoomTrack>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            zone: DisplayZone::default(),
            rooms: default_rooms(),
        }
    }
}

impl LayoutContext {
    /// Creates a context.
    pub fn new(zone: DisplayZone, rooms: Vec<RoomTrack>) -> Self {
        Self { zone, rooms }
    }

    /// Builder method to set the display zone.
    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Returns true if `room` is one of the configured tracks.
    pub fn has_room(&self, room: &str) -> bool {
        self.rooms.iter().any(|r| r.id == room)
    }
}

/// A sub-event together with its grid rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedSubEvent<'a> {
    /// The placed sub-event.
    pub sub_event: SubEvent<'a>,
    /// Its rows within the day's range.
    pub rows: RowPosition,
}

impl<'a> PositionedSubEvent<'a> {
    /// Room track id.
    pub fn room(&self) -> &'a str {
        self.sub_event.room
    }

    /// The parent event.
    pub fn event(&self) -> &'a Event {
        self.sub_event.event
    }
}

/// The laid-out timeline of a day with at least one sub-event.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTimeline<'a> {
    /// Displayed hour window.
    pub range: TimelineRange,
    /// Sub-events in bucket order.
    pub positioned: Vec<PositionedSubEvent<'a>>,
}

impl<'a> DayTimeline<'a> {
    /// Lays out one day's bucket.
    pub fn from_bucket(bucket: &[SubEvent<'a>]) -> LayoutResult<Self> {
        let range = timeline_range(bucket)?;
        let positioned = bucket
            .iter()
            .map(|sub_event| PositionedSubEvent {
                sub_event: *sub_event,
                rows: map_rows(&range, sub_event),
            })
            .collect();
        Ok(Self { range, positioned })
    }

    /// Number of grid rows per room lane.
    pub fn row_count(&self) -> u32 {
        self.range.row_count()
    }

    /// Hours that get a label on the time axis.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.range.hour_marks()
    }

    /// Sub-events placed in `room`, in bucket order.
    pub fn lane<'s>(&'s self, room: &'s str) -> impl Iterator<Item = &'s PositionedSubEvent<'a>> {
        self.positioned.iter().filter(move |p| p.room() == room)
    }
}

/// What a single day shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DaySchedule<'a> {
    /// No sub-events.
    Empty,
    /// A timeline with positioned sub-events.
    Timeline(DayTimeline<'a>),
    /// The day's sub-events could not be laid out.
    Invalid(LayoutError),
}

impl DaySchedule<'_> {
    /// Returns true for days without sub-events.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One day of the month layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout<'a> {
    /// Calendar date.
    pub date: NaiveDate,
    /// What the day shows.
    pub schedule: DaySchedule<'a>,
}

impl DayLayout<'_> {
    /// Day of month (1-based).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// The layout of a whole month, one entry per day.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout<'a> {
    /// Target year.
    pub year: i32,
    /// Target month (1-12).
    pub month: u32,
    /// Room tracks the layout was built for.
    pub rooms: &'a [RoomTrack],
    /// Days `1..=days_in_month`, in order.
    pub days: Vec<DayLayout<'a>>,
}

impl<'a> MonthLayout<'a> {
    /// Returns the layout of `day` (1-based).
    pub fn day(&self, day: u32) -> Option<&DayLayout<'a>> {
        let index = usize::try_from(day).ok()?.checked_sub(1)?;
        self.days.get(index)
    }

    /// All positioned sub-events of the month, day by day.
    pub fn positioned(&self) -> impl Iterator<Item = &PositionedSubEvent<'a>> {
        self.days.iter().flat_map(|d| match &d.schedule {
            DaySchedule::Timeline(timeline) => timeline.positioned.as_slice(),
            DaySchedule::Empty | DaySchedule::Invalid(_) => &[],
        })
    }

    /// Room ids used by placed sub-events that are not configured tracks.
    ///
    /// Each id appears once, in order of first use.
    pub fn unknown_rooms(&self) -> Vec<&'a str> {
        let mut unknown: Vec<&'a str> = Vec::new();
        for placed in self.positioned() {
            let room = placed.room();
            if !self.rooms.iter().any(|r| r.id == room) && !unknown.contains(&room) {
                unknown.push(room);
            }
        }
        unknown
    }

    /// Days that could not be laid out.
    pub fn invalid_days(&self) -> impl Iterator<Item = (u32, &LayoutError)> {
        self.days.iter().filter_map(|d| match &d.schedule {
            DaySchedule::Invalid(err) => Some((d.day(), err)),
            _ => None,
        })
    }
}

/// Builds the layout of `year`/`month` from `events`.
///
/// A day whose sub-events yield a degenerate range is reported as
/// [`DaySchedule::Invalid`] and does not affect other days.
///
/// # Errors
///
/// Structural failures abort the run: [`LayoutError::InvalidMonth`] and
/// [`LayoutError::DayOutOfRange`].
pub fn build_month_layout<'a>(
    events: &'a [Event],
    year: i32,
    month: u32,
    ctx: &'a LayoutContext,
) -> LayoutResult<MonthLayout<'a>> {
    let sub_events = expand_events(events, ctx.zone);
    let buckets = group_by_day(year, month, sub_events)?;

    let mut days = Vec::with_capacity(buckets.days_in_month() as usize);
    for (day, bucket) in buckets.iter() {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(LayoutError::InvalidMonth { year, month })?;
        let schedule = layout_day(bucket);
        if let DaySchedule::Invalid(ref err) = schedule {
            tracing::warn!(%date, error = %err, "skipping day with invalid layout");
        }
        days.push(DayLayout { date, schedule });
    }

    let layout = MonthLayout {
        year,
        month,
        rooms: &ctx.rooms,
        days,
    };
    for room in layout.unknown_rooms() {
        tracing::warn!(room, "sub-event booked in a room that is not configured");
    }
    tracing::debug!(
        year,
        month,
        placed = layout.positioned().count(),
        invalid = layout.invalid_days().count(),
        "built month layout"
    );
    Ok(layout)
}

/// Lays out a single day's bucket.
pub fn layout_day<'a>(bucket: &[SubEvent<'a>]) -> DaySchedule<'a> {
    if bucket.is_empty() {
        return DaySchedule::Empty;
    }
    match DayTimeline::from_bucket(bucket) {
        Ok(timeline) => DaySchedule::Timeline(timeline),
        Err(err) => DaySchedule::Invalid(err),
    }
}
