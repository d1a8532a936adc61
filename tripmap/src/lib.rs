//! Tripmap shows a travel itinerary on a map and filters it by calendar selection.
//!
//! Overview
//! - Loads two datasets (stops and routes) once, merges them, and sorts them by date.
//! - On every calendar refresh, resolves the widget state into an inclusive date
//!   range, slices the trip table, and renders the slice as a styled map layer.
//! - Produces the calendar event feed so trip days appear as clickable entries.
//!
//! Key behaviors
//! - No selection shows the full trip span. Ambiguous, malformed, or inverted
//!   selections also show the full span; the view's `origin` records why.
//! - Clicked dates and the start of dragged selections are shifted by the
//!   configured `DayOffsetPolicy` (one day by default) to match the widget.
//! - An empty trip is a startup error: `build()` returns `NoTripData`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use serde_json::json;
//!
//! let trip = tripmap::TripMap::builder()
//!     .with_source(Arc::new(tripmap_mock::MockSource::new()))
//!     .build()?;
//!
//! let idle = trip.refresh(&json!({}));
//! assert_eq!(idle.range, trip.default_range());
//!
//! let clicked = trip.refresh(&json!({ "date_click": { "date": "2025-03-07" } }));
//! println!("{} stops on {}", clicked.events.len(), clicked.range);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod view;

pub use crate::core::{TripMap, TripMapBuilder};
pub use view::TripView;

// Re-export core types for convenience
pub use tripmap_core::{
    Bounds, CalendarEvent, CalendarOptions, CalendarSelection, DateRange, DateRangeResolver,
    DayOffsetPolicy, EventKind, GeoJsonRenderer, GeoJsonSource, Geometry, InteractionKind,
    MapRenderer, MapStyle, Position, RangeOrigin, RenderedMap, ResolvedRange, TripEvent,
    TripMapConfig, TripMapError, TripSource, TripTable, WIDGET_DAY_COMPENSATION, default_range,
    has_selection, resolve_range,
};
