//! Output formatting for month layouts.
//!
//! This module turns a [`MonthLayout`] into something a consumer can show:
//! - **TTY**: plain text, one block per day with its room lanes
//! - **JSON**: machine-readable day and slot records for a renderer
//!
//! # Example
//!
//! ```rust
//! use roomcal_core::format::{FormatOptions, LayoutFormatter};
//! use roomcal_core::{LayoutContext, build_month_layout};
//!
//! let ctx = LayoutContext::default();
//! let layout = build_month_layout(&[], 2025, 5, &ctx).unwrap();
//! let formatter = LayoutFormatter::new(FormatOptions::default());
//! let text = formatter.format_tty(&layout);
//! assert!(text.starts_with("1 May: Thu"));
//! ```

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::layout::{
    DayLayout, DaySchedule, DayTimeline, MonthLayout, PositionedSubEvent, SubEvent, TimelineRange,
};
use crate::room::RoomTrack;

/// The output format for layout display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Configuration options for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Text shown for a day without sub-events.
    pub no_events_text: String,
    /// Whether days without sub-events are included in TTY output.
    pub show_empty_days: bool,
    /// Maximum length for event names (truncated with ellipsis).
    pub max_name_length: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            no_events_text: "No events...".to_string(),
            show_empty_days: true,
            max_name_length: None,
        }
    }
}

/// Layout state of a day in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Empty,
    Timeline,
    Invalid,
}

/// JSON output for a whole month.
#[derive(Debug, Clone, Serialize)]
pub struct JsonMonth {
    pub year: i32,
    pub month: u32,
    /// Configured room tracks, in lane order.
    pub rooms: Vec<RoomTrack>,
    pub days: Vec<JsonDay>,
}

/// A single day in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDay {
    /// Day of month.
    pub day: u32,
    /// ISO date.
    pub date: String,
    /// Header text, e.g. "7 May: Wed".
    pub header: String,
    pub status: DayStatus,
    /// Displayed hour window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<TimelineRange>,
    /// Grid rows per lane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,
    /// Hour axis labels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<String>,
    /// Positioned sub-events in bucket order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<JsonSlot>,
    /// Why the day could not be laid out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A positioned sub-event in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSlot {
    /// Event name (may be truncated).
    pub event: String,
    pub language: String,
    pub room: String,
    /// Start in RFC 3339, display zone.
    pub start: String,
    /// End in RFC 3339, display zone.
    pub end: String,
    /// "HH:MM - HH:MM".
    pub time_display: String,
    pub provisional: bool,
    pub start_row: i32,
    pub end_row: i32,
}

/// Output formatter for month layouts.
#[derive(Debug, Clone)]
pub struct LayoutFormatter {
    options: FormatOptions,
}

impl LayoutFormatter {
    /// Creates a new LayoutFormatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a new LayoutFormatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Formats a whole month as text, days separated by a blank line.
    pub fn format_tty(&self, layout: &MonthLayout<'_>) -> String {
        layout
            .days
            .iter()
            .filter(|d| self.options.show_empty_days || !d.schedule.is_empty())
            .map(|d| self.format_day_tty(d, layout.rooms))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Formats one day as text.
    pub fn format_day_tty(&self, day: &DayLayout<'_>, rooms: &[RoomTrack]) -> String {
        let mut lines = vec![day_header(day)];
        match &day.schedule {
            DaySchedule::Empty => lines.push(format!("  {}", self.options.no_events_text)),
            DaySchedule::Invalid(err) => lines.push(format!("  invalid: {}", err)),
            DaySchedule::Timeline(timeline) => {
                let hours: Vec<String> = timeline.hours().map(hour_label).collect();
                lines.push(format!(
                    "  hours: {} ({} rows)",
                    hours.join(", "),
                    timeline.row_count()
                ));
                for (room, description) in lane_order(timeline, rooms) {
                    lines.push(match description {
                        Some(text) => format!("  [{}] {}", room, text),
                        None => format!("  [{}]", room),
                    });
                    for placed in timeline.lane(room) {
                        lines.push(format!("    {}", self.format_slot_line(placed)));
                    }
                }
            }
        }
        lines.join("\n")
    }

    /// Formats a whole month as JSON output.
    pub fn format_json(&self, layout: &MonthLayout<'_>) -> JsonMonth {
        JsonMonth {
            year: layout.year,
            month: layout.month,
            rooms: layout.rooms.to_vec(),
            days: layout.days.iter().map(|d| self.format_day_json(d)).collect(),
        }
    }

    /// Formats one day as JSON output.
    pub fn format_day_json(&self, day: &DayLayout<'_>) -> JsonDay {
        let mut json = JsonDay {
            day: day.day(),
            date: day.date.to_string(),
            header: day_header(day),
            status: DayStatus::Empty,
            range: None,
            row_count: None,
            hours: Vec::new(),
            slots: Vec::new(),
            error: None,
        };

        match &day.schedule {
            DaySchedule::Empty => {}
            DaySchedule::Invalid(err) => {
                json.status = DayStatus::Invalid;
                json.error = Some(err.to_string());
            }
            DaySchedule::Timeline(timeline) => {
                json.status = DayStatus::Timeline;
                json.range = Some(timeline.range);
                json.row_count = Some(timeline.row_count());
                json.hours = timeline.hours().map(hour_label).collect();
                json.slots = timeline
                    .positioned
                    .iter()
                    .map(|p| self.to_json_slot(p))
                    .collect();
            }
        }
        json
    }

    fn format_slot_line(&self, placed: &PositionedSubEvent<'_>) -> String {
        let event = placed.event();
        let mut line = format!(
            "rows {}-{}  {}  {} ({})",
            placed.rows.start_row,
            placed.rows.end_row,
            clock_span(&placed.sub_event),
            self.event_name(&event.name),
            event.language
        );
        if placed.sub_event.provisional {
            line.push_str(" [tentative]");
        }
        line
    }

    fn to_json_slot(&self, placed: &PositionedSubEvent<'_>) -> JsonSlot {
        let sub = &placed.sub_event;
        JsonSlot {
            event: self.event_name(&sub.event.name).into_owned(),
            language: sub.event.language.clone(),
            room: sub.room.to_string(),
            start: sub.start.to_rfc3339(),
            end: sub.end.to_rfc3339(),
            time_display: clock_span(sub),
            provisional: sub.provisional,
            start_row: placed.rows.start_row,
            end_row: placed.rows.end_row,
        }
    }

    fn event_name<'s>(&self, name: &'s str) -> Cow<'s, str> {
        match self.options.max_name_length {
            Some(max) => ellipsis(name, max),
            None => Cow::Borrowed(name),
        }
    }
}

/// Lanes to print for a day: configured rooms with sub-events, in
/// configuration order, then unconfigured rooms in order of first use.
fn lane_order<'r>(
    timeline: &'r DayTimeline<'_>,
    rooms: &'r [RoomTrack],
) -> Vec<(&'r str, Option<&'r str>)> {
    let mut lanes: Vec<(&str, Option<&str>)> = rooms
        .iter()
        .filter(|r| timeline.lane(&r.id).next().is_some())
        .map(|r| (r.id.as_str(), r.description.as_deref()))
        .collect();

    for placed in &timeline.positioned {
        let room = placed.room();
        if !rooms.iter().any(|r| r.id == room) && !lanes.iter().any(|(id, _)| *id == room) {
            lanes.push((room, Some("(not configured)")));
        }
    }
    lanes
}

/// Label for an hour on the time axis.
///
/// Hours up to and including 12 are labelled AM, later ones PM.
pub fn hour_label(hour: u32) -> String {
    if hour <= 12 {
        format!("{} AM", hour)
    } else {
        format!("{} PM", hour - 12)
    }
}

/// Zero-pads a clock component to two digits.
pub fn two_digits(n: u32) -> String {
    format!("{:02}", n)
}

fn clock(time: &DateTime<FixedOffset>) -> String {
    format!("{}:{}", two_digits(time.hour()), two_digits(time.minute()))
}

/// "HH:MM - HH:MM" for a sub-event.
pub fn clock_span(sub_event: &SubEvent<'_>) -> String {
    format!("{} - {}", clock(&sub_event.start), clock(&sub_event.end))
}

/// Header of a day block, e.g. "7 May: Wed".
pub fn day_header(day: &DayLayout<'_>) -> String {
    day.date.format("%-d %b: %a").to_string()
}

/// Truncates a string with ellipsis if it exceeds the given length.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 {
        return Cow::Borrowed("");
    }

    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }

    let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
    Cow::Owned(format!("{}...", truncated))
}
