//! Core types: events, rooms, payload decoding, timeline layout, formatting

pub mod details;
pub mod error;
pub mod event;
pub mod format;
pub mod layout;
pub mod payload;
pub mod room;
pub mod time;
pub mod tracing;

pub use details::{AllocationLine, DetailColumns, DetailEntry, DetailValue, event_details};
pub use error::{LayoutError, LayoutResult, PayloadError, PayloadResult};
pub use event::{Allocation, AllocationKind, Event};
pub use format::{
    DayStatus, FormatOptions, JsonDay, JsonMonth, JsonSlot, LayoutFormatter, OutputFormat,
    clock_span, day_header, ellipsis, hour_label, two_digits,
};
pub use layout::{
    DayLayout, DaySchedule, DayTimeline, LayoutContext, MonthLayout, PositionedSubEvent,
    RowPosition, SubEvent, TimelineRange, build_month_layout,
};
pub use payload::EventPayload;
pub use room::{RoomTrack, default_rooms};
pub use time::{DisplayZone, days_in_month, parse_timestamp};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
