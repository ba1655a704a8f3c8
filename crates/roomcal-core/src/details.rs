//! Detail view of a single event.
//!
//! The detail panel lists an event's raw column values next to the payload's
//! column names. A few columns get special treatment: the allocation column
//! expands into one line per booking, and the date and time columns show
//! only the relevant half of a display-zone timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::Event;
use crate::time::{DisplayZone, parse_timestamp};

/// Indexes of the columns that are not shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailColumns {
    /// Column listing the event's allocations.
    pub allocation: usize,
    /// Column holding the start date.
    pub start_date: usize,
    /// Column holding the start time.
    pub start_time: usize,
    /// Column holding the end time.
    pub end_time: usize,
}

impl Default for DetailColumns {
    fn default() -> Self {
        Self {
            allocation: 2,
            start_date: 9,
            start_time: 10,
            end_time: 11,
        }
    }
}

/// One booking as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationLine {
    pub room: String,
    /// Display-zone start, `YYYY-MM-DDTHH:MM:SS`.
    pub start: String,
    /// Display-zone end, `YYYY-MM-DDTHH:MM:SS`.
    pub end: String,
    pub provisional: bool,
}

/// The rendered value of one detail column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DetailValue {
    Text(String),
    Date(String),
    Time(String),
    Allocations(Vec<AllocationLine>),
}

/// One row of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    /// Column index in the payload.
    pub index: usize,
    /// Column name.
    pub column: String,
    pub value: DetailValue,
}

/// Formats an instant as display-zone `YYYY-MM-DDTHH:MM:SS`.
pub fn local_stamp(instant: DateTime<Utc>, zone: &DisplayZone) -> String {
    zone.localize(instant)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// Builds the detail view of `event`.
///
/// Columns whose value is missing, null or an empty string are skipped.
pub fn event_details(
    event: &Event,
    column_names: &[String],
    columns: &DetailColumns,
    zone: &DisplayZone,
) -> Vec<DetailEntry> {
    column_names
        .iter()
        .enumerate()
        .filter_map(|(index, column)| {
            let raw = event.details.get(index)?;
            if is_blank(raw) {
                return None;
            }
            Some(DetailEntry {
                index,
                column: column.clone(),
                value: detail_value(event, index, raw, columns, zone),
            })
        })
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn detail_value(
    event: &Event,
    index: usize,
    raw: &Value,
    columns: &DetailColumns,
    zone: &DisplayZone,
) -> DetailValue {
    if index == columns.allocation {
        return DetailValue::Allocations(allocation_lines(event, zone));
    }

    let format = if index == columns.start_date {
        "%Y-%m-%d"
    } else if index == columns.start_time || index == columns.end_time {
        "%H:%M:%S"
    } else {
        return DetailValue::Text(as_text(raw));
    };

    let text = as_text(raw);
    let Some(instant) = parse_timestamp(&text, zone) else {
        tracing::warn!(
            event = %event.name,
            column = index,
            value = %text,
            "unreadable timestamp in detail column"
        );
        return DetailValue::Text(text);
    };

    let shown = zone.localize(instant).format(format).to_string();
    if index == columns.start_date {
        DetailValue::Date(shown)
    } else {
        DetailValue::Time(shown)
    }
}

fn allocation_lines(event: &Event, zone: &DisplayZone) -> Vec<AllocationLine> {
    event
        .allocations()
        .map(|(kind, a)| AllocationLine {
            room: a.room.clone(),
            start: local_stamp(a.start, zone),
            end: local_stamp(a.end, zone),
            provisional: kind.is_provisional(),
        })
        .collect()
}
