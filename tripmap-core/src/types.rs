//! Re-export of foundational types from `tripmap-types`.
pub use tripmap_types::{
    DateRange, DayOffsetPolicy, MapStyle, TripMapConfig, TripMapError, WIDGET_DAY_COMPENSATION,
};
