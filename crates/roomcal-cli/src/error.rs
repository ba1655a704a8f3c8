//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use roomcal_core::{LayoutError, PayloadError, TracingError};

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration parsed but is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Payload could not be read from disk.
    #[error("failed to read payload {path}: {source}")]
    ReadPayload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload could not be decoded.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Layout run aborted.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// No event at the requested position.
    #[error("no event at index {index} (payload has {count} events)")]
    EventIndex { index: usize, count: usize },

    /// Requested day is not in the month.
    #[error("day {day} is not in {year}-{month:02}")]
    DayNotInMonth { year: i32, month: u32, day: u32 },

    /// Output serialization failed.
    #[error("failed to serialize output: {0}")]
    Serialize(String),

    /// Tracing setup failed.
    #[error(transparent)]
    Tracing(#[from] TracingError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
