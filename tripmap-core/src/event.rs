//! Trip events: one dated stop or route segment with display metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `[longitude, latitude]` pair in WGS84 degrees, GeoJSON axis order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl Position {
    /// Build a position from longitude and latitude.
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Map shape of a trip event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single stop.
    Point(Position),
    /// A travelled route.
    LineString(Vec<Position>),
}

impl Geometry {
    /// All vertices of the shape.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        match self {
            Self::Point(p) => core::slice::from_ref(p),
            Self::LineString(line) => line,
        }
    }
}

/// Which dataset an event was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Loaded from the stops (points) dataset.
    Stop,
    /// Loaded from the routes dataset.
    Route,
}

/// One row of the trip table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEvent {
    /// Calendar day of the event. Not unique across the table.
    pub date: NaiveDate,
    /// Human label for the day (e.g. "Giorno 6").
    pub day_label: String,
    /// Free-text description shown in the popup.
    pub description: String,
    /// Display color (CSS color name or hex).
    pub color_category: String,
    /// Map shape.
    pub geometry: Geometry,
    /// Source dataset.
    pub kind: EventKind,
}
