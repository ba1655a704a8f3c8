//! Row mapping: clock times to half-hour grid rows.
//!
//! Row 1 is the half hour starting at `min_hour:00`; every hour spans two
//! rows. A time past the first quarter of its hour moves to the second
//! half-hour row. No input ever moves more than one row.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::layout::expand::SubEvent;
use crate::layout::range::{ROWS_PER_HOUR, TimelineRange};

/// Minutes past the hour up to which a time stays in the first half-hour row.
pub const FIRST_SLOT_MAX_MINUTE: u32 = 15;

/// Grid rows of one sub-event, relative to its day's range.
///
/// `end_row` may equal `start_row` for very short sub-events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPosition {
    /// Row the sub-event starts on (1-based).
    pub start_row: i32,
    /// Row the sub-event ends on.
    pub end_row: i32,
}

impl RowPosition {
    /// Number of rows covered; zero-height spans count as one.
    pub fn span(&self) -> i32 {
        (self.end_row - self.start_row).max(1)
    }
}

/// Maps one wall-clock time to its row within `range`.
pub fn row_for(range: &TimelineRange, time: DateTime<FixedOffset>) -> i32 {
    let hours_in = time.hour() as i32 - range.min_hour as i32;
    let mut row = hours_in * ROWS_PER_HOUR as i32 + 1;
    if time.minute() > FIRST_SLOT_MAX_MINUTE {
        row += 1;
    }
    row
}

/// Maps a sub-event's start and end to grid rows within `range`.
pub fn map_rows(range: &TimelineRange, sub_event: &SubEvent<'_>) -> RowPosition {
    RowPosition {
        start_row: row_for(range, sub_event.start),
        end_row: row_for(range, sub_event.end),
    }
}
