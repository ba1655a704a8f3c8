//! Room tracks: the fixed parallel lanes of the calendar.

use serde::{Deserialize, Serialize};

/// One lane of the day timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTrack {
    /// Identifier matched against [`Allocation::room`](crate::Allocation::room).
    pub id: String,
    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RoomTrack {
    /// Creates a track without a description.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The stock track list: six physical rooms and the virtual `upcoming` lane.
pub fn default_rooms() -> Vec<RoomTrack> {
    vec![
        RoomTrack::new("131").with_description("Storage"),
        RoomTrack::new("132"),
        RoomTrack::new("133").with_description("Monitoring"),
        RoomTrack::new("134"),
        RoomTrack::new("135"),
        RoomTrack::new("136"),
        RoomTrack::new("upcoming"),
    ]
}
