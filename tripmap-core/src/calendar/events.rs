use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::TripTable;

/// One entry of the calendar widget's event feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Text shown on the calendar cell.
    pub title: String,
    /// First day of the entry.
    pub start: NaiveDate,
    /// Last day of the entry, equal to `start`.
    ///
    /// The widget drops an all-day `end` that is not after `start`, so clicks
    /// on these entries report only `start`.
    pub end: NaiveDate,
    /// Fill color.
    pub background_color: String,
    /// Border color.
    pub border_color: String,
    /// Whole-day entry.
    pub all_day: bool,
}

/// Widget options matching the trip table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    /// Day the calendar opens on.
    pub initial_date: Option<NaiveDate>,
    /// Initial view name.
    pub initial_view: String,
    /// Allow range selection by dragging.
    pub selectable: bool,
}

impl CalendarOptions {
    /// Options opening the month view on the first trip day.
    #[must_use]
    pub fn for_table(table: &TripTable) -> Self {
        Self {
            initial_date: table.span().map(|r| r.start()),
            initial_view: "dayGridMonth".to_string(),
            selectable: true,
        }
    }
}

/// Build the calendar feed: one single-day entry per trip event.
#[must_use]
pub fn calendar_events(table: &TripTable) -> Vec<CalendarEvent> {
    table
        .events()
        .iter()
        .map(|e| CalendarEvent {
            title: format!("{}: {}", e.day_label, e.description),
            start: e.date,
            end: e.date,
            background_color: e.color_category.clone(),
            border_color: e.color_category.clone(),
            all_day: true,
        })
        .collect()
}
