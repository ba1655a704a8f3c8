//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use roomcal_core::OutputFormat;

/// roomcal - Day-by-day room timelines for an event calendar
#[derive(Debug, Parser)]
#[command(name = "roomcal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ROOMCAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    // --- Month selection ---
    /// Year to lay out (defaults to the current year in the display zone)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to lay out, 1-12 (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Only show this day of the month
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,

    // --- Display options ---
    /// Maximum event name length (truncated with ellipsis)
    #[arg(long)]
    pub max_name_length: Option<usize>,

    /// Hide days without events
    #[arg(long)]
    pub hide_empty_days: bool,

    /// Event payload file (`-` or omitted reads stdin)
    pub payload: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the detail entries of one event
    Details {
        /// Event payload file (`-` reads stdin)
        payload: PathBuf,

        /// Zero-based position of the event in the payload
        index: usize,
    },

    /// List the configured room tracks
    Rooms,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_selection() {
        let cli = Cli::try_parse_from([
            "roomcal", "--year", "2025", "--month", "5", "--day", "7", "--json", "events.json",
        ])
        .unwrap();
        assert_eq!(cli.year, Some(2025));
        assert_eq!(cli.month, Some(5));
        assert_eq!(cli.day, Some(7));
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert_eq!(cli.payload, Some(PathBuf::from("events.json")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(Cli::try_parse_from(["roomcal", "--month", "13"]).is_err());
        assert!(Cli::try_parse_from(["roomcal", "--month", "0"]).is_err());
    }

    #[test]
    fn parses_details_subcommand() {
        let cli = Cli::try_parse_from(["roomcal", "details", "events.json", "3"]).unwrap();
        match cli.command {
            Some(Command::Details { payload, index }) => {
                assert_eq!(payload, PathBuf::from("events.json"));
                assert_eq!(index, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_config_subcommand() {
        let cli = Cli::try_parse_from(["roomcal", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Validate
            })
        ));
    }

    #[test]
    fn tty_is_default_output() {
        let cli = Cli::try_parse_from(["roomcal"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Tty);
        assert!(cli.payload.is_none());
    }
}
