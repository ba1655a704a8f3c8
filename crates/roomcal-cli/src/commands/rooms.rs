//! Room listing command.

use roomcal_core::RoomTrack;

use crate::config::CalendarConfig;
use crate::error::CliResult;

/// Prints the configured room tracks in lane order.
pub fn list(config: &CalendarConfig, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.rooms)?);
    } else {
        println!("{}", render(&config.rooms));
    }
    Ok(())
}

/// One line per track: id, then description if any.
pub fn render(rooms: &[RoomTrack]) -> String {
    rooms
        .iter()
        .map(|r| match &r.description {
            Some(d) => format!("{}\t{}", r.id, d),
            None => r.id.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
