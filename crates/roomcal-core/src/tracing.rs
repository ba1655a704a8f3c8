//! Logging for roomcal runs.
//!
//! Layout runs log pipeline counts at `debug` and isolated bad days or
//! unknown rooms at `warn`. [`init_tracing`] installs the stderr subscriber
//! that prints them; `RUST_LOG` takes precedence over the configured level.
//!
//! ```ignore
//! use roomcal_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::cli())?;
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events the default directive enables.
const LOG_TARGETS: &[&str] = &["roomcal_core", "roomcal_cli", "roomcal"];

#[derive(Debug, Error)]
pub enum TracingError {
    #[error("a tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("invalid log directive: {0}")]
    Directive(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracingOutputFormat {
    /// One line per event, no timestamp.
    #[default]
    Compact,
    /// Multi-line, for reading a `--debug` run.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level for roomcal targets when RUST_LOG is unset.
    pub level: Level,
    pub format: TracingOutputFormat,
    /// Adds source location and target to each line.
    pub verbose: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::cli()
    }
}

impl TracingConfig {
    /// Warnings only.
    #[must_use]
    pub fn cli() -> Self {
        Self {
            level: Level::WARN,
            format: TracingOutputFormat::Compact,
            verbose: false,
        }
    }

    /// Everything from `debug` up, with locations. Used by `--debug`.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            level: Level::DEBUG,
            verbose: true,
            ..Self::cli()
        }
    }

    #[must_use]
    pub fn format(mut self, format: TracingOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// `roomcal_core=<level>,...` for every roomcal target.
    pub fn default_directive(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn env_filter(&self) -> Result<EnvFilter, TracingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(self.default_directive())?),
        }
    }
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Fails when a subscriber is already installed or the directive does not
/// parse.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.env_filter()?;

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.verbose)
        .with_file(config.verbose)
        .with_line_number(config.verbose);
    let layer = match config.format {
        TracingOutputFormat::Compact => base.compact().without_time().boxed(),
        TracingOutputFormat::Pretty => base.pretty().boxed(),
        TracingOutputFormat::Json => base.json().boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
