//! Time helpers for the calendar display zone.
//!
//! The calendar renders every day in a single fixed zone. [`DisplayZone`]
//! wraps that offset and is the only place where UTC instants become
//! wall-clock values (year, month, day, hour, minute). The month helpers
//! use 1-based months, as chrono does.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Offset used when nothing else is configured: UTC+05:30.
pub const DEFAULT_OFFSET_MINUTES: i32 = 330;

/// Naive layouts accepted after RFC 3339 fails; read as display-zone wall time.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The fixed zone all calendar days and hours are read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone(FixedOffset);

impl DisplayZone {
    /// Creates a zone from an offset east of UTC, in minutes.
    ///
    /// Returns `None` when the offset is a day or more away from UTC.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self)
    }

    /// The UTC zone.
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Returns the underlying offset.
    pub fn offset(&self) -> FixedOffset {
        self.0
    }

    /// Returns the offset east of UTC in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.0.local_minus_utc() / 60
    }

    /// Converts a UTC instant to wall-clock time in this zone.
    pub fn localize(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.0)
    }

    /// Interprets a naive wall-clock time as local to this zone.
    pub fn from_local(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.0
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.localize(Utc::now())
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::from_offset_minutes(DEFAULT_OFFSET_MINUTES).unwrap_or_else(Self::utc)
    }
}

/// Parses a timestamp string from an event payload.
///
/// RFC 3339 strings carry their own offset. Strings without one are taken
/// as wall-clock time in `zone`. Returns `None` for anything else.
pub fn parse_timestamp(text: &str, zone: &DisplayZone) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .and_then(|naive| zone.from_local(naive))
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}
