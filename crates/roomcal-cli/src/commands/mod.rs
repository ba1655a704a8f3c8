//! Subcommand implementations.

pub mod config;
pub mod details;
pub mod layout;
pub mod rooms;

use std::io::Read;
use std::path::Path;

use roomcal_core::{DisplayZone, EventPayload};

use crate::error::{CliError, CliResult};

/// Reads and decodes a payload file. `None` or `-` reads stdin.
pub fn read_payload(path: Option<&Path>, zone: &DisplayZone) -> CliResult<EventPayload> {
    let text = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|source| CliError::ReadPayload {
                path: p.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let payload = EventPayload::from_json(&text, zone)?;
    tracing::debug!(
        events = payload.events.len(),
        allocations = payload.allocation_count(),
        "loaded payload"
    );
    Ok(payload)
}
