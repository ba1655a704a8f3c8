//! CLI, configuration, month layout rendering
//!
//! This crate provides the `roomcal` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::CalendarConfig;
pub use error::{CliError, CliResult};
