//! Decoding of the event payload served by the booking sheet backend.
//!
//! The document is a two-element JSON array `[events, columnNames]`:
//!
//! ```json
//! [
//!   [{ "name": "Keynote", "lang": "en",
//!      "allocation": [[["131", "2025-05-07T09:00:00", "2025-05-07T10:30:00"]], []],
//!      "details": ["Keynote", "en", "131", "..."] }],
//!   ["Name", "Language", "Allocation", "..."]
//! ]
//! ```
//!
//! `allocation` holds the tentative list first and the confirmed list
//! second. Rooms may be strings or numbers; timestamps may be RFC 3339
//! strings, naive local strings, or epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PayloadError, PayloadResult};
use crate::event::{Allocation, Event};
use crate::time::{DisplayZone, parse_timestamp};

/// A decoded payload: the events plus the names of their detail columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    /// Events in payload order.
    pub events: Vec<Event>,
    /// Names of the columns in [`Event::details`].
    pub column_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawPayload(Vec<RawEvent>, Vec<String>);

#[derive(Debug, Deserialize)]
struct RawEvent {
    name: String,
    #[serde(default, alias = "language")]
    lang: String,
    #[serde(default)]
    allocation: (Vec<RawAllocation>, Vec<RawAllocation>),
    #[serde(default)]
    details: Vec<Value>,
}

/// `[room, start, end]`
type RawAllocation = (Value, Value, Value);

impl EventPayload {
    /// Decodes a payload document.
    ///
    /// # Errors
    ///
    /// [`PayloadError::Json`] when the document is not valid JSON or has the
    /// wrong shape, [`PayloadError::MalformedTimestamp`] for an allocation
    /// time that cannot be read, and [`PayloadError::InvalidRoom`] for a
    /// room that is neither a string nor a number.
    pub fn from_json(text: &str, zone: &DisplayZone) -> PayloadResult<Self> {
        let raw: RawPayload = serde_json::from_str(text)?;
        Self::from_raw(raw, zone)
    }

    /// Decodes an already parsed payload document.
    pub fn from_value(value: Value, zone: &DisplayZone) -> PayloadResult<Self> {
        let raw: RawPayload = serde_json::from_value(value)?;
        Self::from_raw(raw, zone)
    }

    fn from_raw(raw: RawPayload, zone: &DisplayZone) -> PayloadResult<Self> {
        let RawPayload(raw_events, column_names) = raw;
        let events = raw_events
            .into_iter()
            .map(|e| decode_event(e, zone))
            .collect::<PayloadResult<Vec<_>>>()?;

        tracing::debug!(
            events = events.len(),
            columns = column_names.len(),
            "decoded event payload"
        );
        Ok(Self {
            events,
            column_names,
        })
    }

    /// Number of allocations across all events.
    pub fn allocation_count(&self) -> usize {
        self.events.iter().map(Event::allocation_count).sum()
    }
}

fn decode_event(raw: RawEvent, zone: &DisplayZone) -> PayloadResult<Event> {
    let (tentative, confirmed) = raw.allocation;
    let decode_all = |list: Vec<RawAllocation>| {
        list.into_iter()
            .map(|a| decode_allocation(&raw.name, a, zone))
            .collect::<PayloadResult<Vec<_>>>()
    };

    Ok(Event {
        tentative: decode_all(tentative)?,
        confirmed: decode_all(confirmed)?,
        name: raw.name,
        language: raw.lang,
        details: raw.details,
    })
}

fn decode_allocation(
    event: &str,
    (room, start, end): RawAllocation,
    zone: &DisplayZone,
) -> PayloadResult<Allocation> {
    Ok(Allocation {
        room: room_id(event, &room)?,
        start: instant(event, &start, zone)?,
        end: instant(event, &end, zone)?,
    })
}

fn room_id(event: &str, value: &Value) -> PayloadResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(PayloadError::InvalidRoom {
            event: event.to_string(),
            value: other.to_string(),
        }),
    }
}

fn instant(event: &str, value: &Value, zone: &DisplayZone) -> PayloadResult<DateTime<Utc>> {
    let parsed = match value {
        Value::String(s) => parse_timestamp(s, zone),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };
    parsed.ok_or_else(|| match value {
        Value::String(s) => PayloadError::malformed_timestamp(event, s.as_str()),
        other => PayloadError::malformed_timestamp(event, other.to_string()),
    })
}
