//! Layout and payload error types.

use thiserror::Error;

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors raised by the timeline layout engine.
///
/// `InvalidMonth` and `DayOutOfRange` are structural and abort the whole
/// run. `EmptyBucket` and `DegenerateRange` concern a single day only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The requested month does not exist.
    #[error("invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    /// A sub-event starts on a day the target month does not have.
    #[error(
        "sub-event of {event:?} starts on day {day}, but {year}-{month:02} has {days_in_month} days"
    )]
    DayOutOfRange {
        event: String,
        day: u32,
        year: i32,
        month: u32,
        days_in_month: u32,
    },

    /// A timeline range was requested for a day without sub-events.
    #[error("cannot compute a timeline range for an empty day")]
    EmptyBucket,

    /// The computed hour window is empty or inverted.
    #[error("degenerate timeline range: {min_hour}h..{max_hour}h")]
    DegenerateRange { min_hour: u32, max_hour: u32 },
}

impl LayoutError {
    /// Returns true for errors that invalidate the whole month.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::InvalidMonth { .. } | Self::DayOutOfRange { .. })
    }
}

/// Result type for payload decoding.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Errors raised while decoding an event payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// An allocation timestamp could not be parsed.
    #[error("malformed timestamp {value:?} in event {event:?}")]
    MalformedTimestamp { event: String, value: String },

    /// An allocation room is neither a string nor a number.
    #[error("invalid room {value} in event {event:?}")]
    InvalidRoom { event: String, value: String },
}

impl PayloadError {
    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(event: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            event: event.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors() {
        assert!(
            LayoutError::InvalidMonth {
                year: 2025,
                month: 13
            }
            .is_structural()
        );
        assert!(
            LayoutError::DayOutOfRange {
                event: "Gala".to_string(),
                day: 31,
                year: 2025,
                month: 4,
                days_in_month: 30,
            }
            .is_structural()
        );
        assert!(!LayoutError::EmptyBucket.is_structural());
        assert!(
            !LayoutError::DegenerateRange {
                min_hour: 14,
                max_hour: 14
            }
            .is_structural()
        );
    }

    #[test]
    fn day_out_of_range_message() {
        let err = LayoutError::DayOutOfRange {
            event: "Gala".to_string(),
            day: 31,
            year: 2025,
            month: 4,
            days_in_month: 30,
        };
        assert_eq!(
            err.to_string(),
            "sub-event of \"Gala\" starts on day 31, but 2025-04 has 30 days"
        );
    }
}
