//! tripmap-core
//!
//! Core types and logic behind the trip viewer.
//!
//! - `event` / `table`: trip events and the date-sorted trip table.
//! - `geojson` / `source`: loading the stops and routes datasets.
//! - `calendar`: validating calendar widget state and building its event feed.
//! - `resolve`: turning calendar state into the displayed date range.
//! - `render`: styling a slice of the table as a map layer.
//!
//! Everything here is synchronous; the table is loaded once and only read
//! afterwards.
#![warn(missing_docs)]

/// Calendar widget boundary.
pub mod calendar;
/// Trip event rows and geometry.
pub mod event;
/// GeoJSON dataset parsing.
pub mod geojson;
/// Map layer rendering.
pub mod render;
/// Date range resolution.
pub mod resolve;
/// Dataset sources and loading.
pub mod source;
/// The date-sorted trip table.
pub mod table;
/// Foundational types shared with `tripmap-types`.
pub mod types;

pub use calendar::{
    CalendarEvent, CalendarOptions, CalendarSelection, InteractionKind, calendar_events,
    has_selection, parse_interaction, parse_selection,
};
pub use event::{EventKind, Geometry, Position, TripEvent};
pub use render::{Bounds, GeoJsonRenderer, MapRenderer, RenderedMap};
pub use resolve::{DateRangeResolver, RangeOrigin, ResolvedRange, resolve_range, resolve_selection};
pub use source::{GeoJsonSource, TripSource, load};
pub use table::{TripTable, default_range, merge_trip_data};
pub use types::*;
