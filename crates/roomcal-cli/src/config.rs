//! Calendar configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/roomcal/config.toml` by default:
//!
//! ```toml
//! debug = false
//!
//! [display]
//! utc_offset_minutes = 330
//! no_events_text = "No events..."
//!
//! [[rooms]]
//! id = "131"
//! description = "Storage"
//!
//! [logging]
//! format = "compact"
//!
//! [columns]
//! allocation = 2
//! start_date = 9
//! start_time = 10
//! end_time = 11
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use roomcal_core::{
    DetailColumns, DisplayZone, FormatOptions, LayoutContext, RoomTrack, TracingConfig,
    TracingOutputFormat, default_rooms,
};

use crate::error::{CliError, CliResult};

/// Largest accepted distance from UTC, in minutes.
const MAX_OFFSET_MINUTES: u32 = 24 * 60;

// ---------------------------------------------------------------------------
// CalendarConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the roomcal CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Debug mode.
    pub debug: bool,

    /// Display settings.
    pub display: DisplaySettings,

    /// Room tracks, in lane order.
    pub rooms: Vec<RoomTrack>,

    /// Detail columns with special rendering.
    pub columns: DetailColumns,

    /// Log output settings.
    pub logging: LoggingSettings,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            debug: false,
            display: DisplaySettings::default(),
            rooms: default_rooms(),
            columns: DetailColumns::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Offset of the display zone from UTC.
    pub utc_offset_minutes: i32,

    /// Text to show for a day without events.
    pub no_events_text: String,

    /// Maximum event name length (truncated with ellipsis).
    pub max_name_length: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: roomcal_core::time::DEFAULT_OFFSET_MINUTES,
            no_events_text: "No events...".to_string(),
            max_name_length: None,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `compact`, `pretty` or `json`.
    pub format: TracingOutputFormat,
}

impl CalendarConfig {
    /// Loads configuration from the default path, or defaults if it is missing.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roomcal")
    }

    /// Checks the settings a layout run depends on.
    pub fn validate(&self) -> CliResult<()> {
        if self.rooms.is_empty() {
            return Err(CliError::InvalidConfig(
                "at least one room must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for room in &self.rooms {
            if room.id.is_empty() {
                return Err(CliError::InvalidConfig("room id must not be empty".to_string()));
            }
            if !seen.insert(room.id.as_str()) {
                return Err(CliError::InvalidConfig(format!(
                    "room {:?} is configured more than once",
                    room.id
                )));
            }
        }

        if self.display.utc_offset_minutes.unsigned_abs() >= MAX_OFFSET_MINUTES {
            return Err(CliError::InvalidConfig(format!(
                "utc_offset_minutes must be within ±{} minutes, got {}",
                MAX_OFFSET_MINUTES, self.display.utc_offset_minutes
            )));
        }

        Ok(())
    }

    /// Returns the display zone.
    pub fn zone(&self) -> CliResult<DisplayZone> {
        DisplayZone::from_offset_minutes(self.display.utc_offset_minutes).ok_or_else(|| {
            CliError::InvalidConfig(format!(
                "utc_offset_minutes {} is not a valid offset",
                self.display.utc_offset_minutes
            ))
        })
    }

    /// Builds the layout context for this configuration.
    pub fn to_layout_context(&self) -> CliResult<LayoutContext> {
        self.validate()?;
        Ok(LayoutContext::new(self.zone()?, self.rooms.clone()))
    }

    /// Builds the tracing setup; `debug` from the CLI or the file enables
    /// verbose output.
    pub fn tracing_config(&self, debug: bool) -> TracingConfig {
        let base = if debug || self.debug {
            TracingConfig::cli_debug()
        } else {
            TracingConfig::cli()
        };
        base.format(self.logging.format)
    }

    /// Builds formatter options for this configuration.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            no_events_text: self.display.no_events_text.clone(),
            max_name_length: self.display.max_name_length,
            ..FormatOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_venue() {
        let config = CalendarConfig::default();
        assert!(!config.debug);
        assert_eq!(config.display.utc_offset_minutes, 330);
        assert_eq!(config.display.no_events_text, "No events...");
        assert_eq!(config.rooms, default_rooms());
        assert_eq!(config.columns, DetailColumns::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: CalendarConfig = toml::from_str("").unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
debug = true

[display]
utc_offset_minutes = 60
no_events_text = "Free"

[[rooms]]
id = "A"
description = "Main hall"

[[rooms]]
id = "B"

[columns]
start_date = 4
"#
        )
        .unwrap();

        let config = CalendarConfig::load_from(file.path()).unwrap();
        assert!(config.debug);
        assert_eq!(config.display.utc_offset_minutes, 60);
        assert_eq!(config.display.no_events_text, "Free");
        assert_eq!(
            config.rooms,
            vec![RoomTrack::new("A").with_description("Main hall"), RoomTrack::new("B")]
        );
        assert_eq!(config.columns.start_date, 4);
        assert_eq!(config.columns.allocation, 2);

        let ctx = config.to_layout_context().unwrap();
        assert_eq!(ctx.zone.offset_minutes(), 60);
        assert!(ctx.has_room("B"));
        assert_eq!(config.format_options().no_events_text, "Free");
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalendarConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn load_from_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rooms = 5").unwrap();
        let err = CalendarConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn rejects_empty_rooms() {
        let config = CalendarConfig {
            rooms: Vec::new(),
            ..CalendarConfig::default()
        };
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
        assert!(config.to_layout_context().is_err());
    }

    #[test]
    fn rejects_duplicate_rooms() {
        let config = CalendarConfig {
            rooms: vec![RoomTrack::new("131"), RoomTrack::new("131")],
            ..CalendarConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_offset_beyond_a_day() {
        let mut config = CalendarConfig::default();
        config.display.utc_offset_minutes = -1440;
        assert!(config.validate().is_err());
        config.display.utc_offset_minutes = -600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_most_negative_offset() {
        let config: CalendarConfig =
            toml::from_str("[display]\nutc_offset_minutes = -2147483648\n").unwrap();
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
        assert!(config.to_layout_context().is_err());
    }

    #[test]
    fn logging_format_selects_subscriber_output() {
        let config: CalendarConfig = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.format, TracingOutputFormat::Json);

        let tracing = config.tracing_config(false);
        assert_eq!(tracing.format, TracingOutputFormat::Json);
        assert!(!tracing.verbose);

        let tracing = config.tracing_config(true);
        assert_eq!(tracing.format, TracingOutputFormat::Json);
        assert!(tracing.verbose);
    }

    #[test]
    fn debug_in_file_enables_verbose_logging() {
        let config: CalendarConfig = toml::from_str("debug = true").unwrap();
        let tracing = config.tracing_config(false);
        assert_eq!(tracing, TracingConfig::cli_debug());
    }

    #[test]
    fn unknown_logging_format_is_a_parse_error() {
        assert!(toml::from_str::<CalendarConfig>("[logging]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn serializes_back_to_toml() {
        let dumped = toml::to_string_pretty(&CalendarConfig::default()).unwrap();
        assert!(dumped.contains("utc_offset_minutes = 330"));
        assert!(dumped.contains("[[rooms]]"));
        let reparsed: CalendarConfig = toml::from_str(&dumped).unwrap();
        assert_eq!(reparsed, CalendarConfig::default());
    }
}
