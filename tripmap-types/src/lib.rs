//! Tripmap-specific error, configuration, and date-range primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod range;

pub use config::{MapStyle, TripMapConfig};
pub use error::TripMapError;
pub use range::{DateRange, DayOffsetPolicy, WIDGET_DAY_COMPENSATION};
