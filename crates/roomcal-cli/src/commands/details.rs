//! Event detail command.

use roomcal_core::{
    DetailColumns, DetailEntry, DetailValue, DisplayZone, EventPayload, event_details,
};

use crate::error::{CliError, CliResult};

/// Builds the detail entries of the event at `index`.
pub fn entries(
    payload: &EventPayload,
    index: usize,
    columns: &DetailColumns,
    zone: &DisplayZone,
) -> CliResult<Vec<DetailEntry>> {
    let event = payload.events.get(index).ok_or(CliError::EventIndex {
        index,
        count: payload.events.len(),
    })?;
    Ok(event_details(event, &payload.column_names, columns, zone))
}

/// Prints the detail entries of the event at `index`.
pub fn show(
    payload: &EventPayload,
    index: usize,
    columns: &DetailColumns,
    zone: &DisplayZone,
    json: bool,
) -> CliResult<()> {
    let entries = entries(payload, index, columns, zone)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{}", render(&entries));
    }
    Ok(())
}

/// Plain text rendering: `column: value`, allocations one per line.
pub fn render(entries: &[DetailEntry]) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        match &entry.value {
            DetailValue::Text(v) | DetailValue::Date(v) | DetailValue::Time(v) => {
                lines.push(format!("{}: {}", entry.column, v));
            }
            DetailValue::Allocations(list) => {
                lines.push(format!("{}:", entry.column));
                for a in list {
                    let marker = if a.provisional { " (tentative)" } else { "" };
                    lines.push(format!("  {}: {} to {}{}", a.room, a.start, a.end, marker));
                }
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        [
            { "name": "Keynote", "lang": "en",
              "allocation": [[["131", "2025-05-06T09:00:00", "2025-05-06T10:00:00"]],
                             [["132", "2025-05-07T09:00:00", "2025-05-07T10:30:00"]]],
              "details": ["Keynote", "en", "131, 132", ""] }
        ],
        ["Name", "Language", "Allocation", "Host"]
    ]"#;

    fn payload() -> EventPayload {
        EventPayload::from_json(PAYLOAD, &DisplayZone::utc()).unwrap()
    }

    fn entries_at(index: usize) -> CliResult<Vec<DetailEntry>> {
        entries(
            &payload(),
            index,
            &DetailColumns::default(),
            &DisplayZone::utc(),
        )
    }

    #[test]
    fn renders_entries() {
        let entries = entries_at(0).unwrap();
        assert_eq!(
            render(&entries),
            "Name: Keynote\n\
             Language: en\n\
             Allocation:\n  \
             131: 2025-05-06T09:00:00 to 2025-05-06T10:00:00 (tentative)\n  \
             132: 2025-05-07T09:00:00 to 2025-05-07T10:30:00"
        );
    }

    #[test]
    fn index_past_end_errors() {
        let err = entries_at(1).unwrap_err();
        assert!(matches!(err, CliError::EventIndex { index: 1, count: 1 }));
    }
}
