//! Configuration commands.

use crate::config::CalendarConfig;
use crate::error::CliResult;

/// Dump the current configuration to stdout.
pub fn dump(config: &CalendarConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("# config.toml ({})", CalendarConfig::default_path().display());
    println!("{}", toml_str);
    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &CalendarConfig) -> CliResult<()> {
    config.validate()?;
    println!(
        "Configuration is valid: {} rooms, UTC{:+} minutes.",
        config.rooms.len(),
        config.display.utc_offset_minutes
    );
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> CliResult<()> {
    println!("config: {}", CalendarConfig::default_path().display());
    Ok(())
}
