//! Calendar widget boundary: interaction parsing, timestamps, and the event feed.
//!
//! Modules include:
//! - `interaction`: validate raw widget state into a `CalendarSelection`
//! - `timestamp`: parse the widget's date and date-time strings
//! - `events`: build the event feed and options the widget renders
/// Event feed and widget options.
pub mod events;
/// Interaction-state parsing.
pub mod interaction;
/// Widget timestamp parsing.
pub mod timestamp;

pub use events::{CalendarEvent, CalendarOptions, calendar_events};
pub use interaction::{
    CalendarSelection, InteractionKind, has_selection, parse_interaction, parse_selection,
};
pub use timestamp::{parse_timezone, parse_widget_timestamp};
