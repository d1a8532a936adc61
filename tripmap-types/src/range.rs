//! Inclusive calendar date ranges and the day-offset policy applied to widget dates.

use core::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::TripMapError;

/// Days added to widget-reported click dates and selection starts.
///
/// The calendar widget reports these one day early relative to the trip day
/// the viewer pointed at. Whether this is a widget quirk or intended
/// behavior is unconfirmed; see `DayOffsetPolicy::none` to disable it.
pub const WIDGET_DAY_COMPENSATION: u64 = 1;

/// Inclusive `(start, end)` calendar date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawRange> for DateRange {
    type Error = TripMapError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<DateRange> for RawRange {
    fn from(r: DateRange) -> Self {
        Self {
            start: r.start,
            end: r.end,
        }
    }
}

impl DateRange {
    /// Build a range from its first and last day (both inclusive).
    ///
    /// # Errors
    /// Returns `InvalidRange` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TripMapError> {
        if start > end {
            return Err(TripMapError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `day` falls inside the range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, counting both ends.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Day offsets applied to calendar widget dates before they become a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOffsetPolicy {
    /// Days added to a clicked date (applied to both ends of the range).
    pub date_click_days: u64,
    /// Days added to the start of a dragged selection. The end is never shifted.
    pub select_start_days: u64,
}

impl Default for DayOffsetPolicy {
    fn default() -> Self {
        Self {
            date_click_days: WIDGET_DAY_COMPENSATION,
            select_start_days: WIDGET_DAY_COMPENSATION,
        }
    }
}

impl DayOffsetPolicy {
    /// Policy that takes widget dates at face value.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            date_click_days: 0,
            select_start_days: 0,
        }
    }

    /// Shift a clicked date.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the shifted date overflows the calendar.
    pub fn shift_click(&self, day: NaiveDate) -> Result<NaiveDate, TripMapError> {
        shift(day, self.date_click_days)
    }

    /// Shift the start of a range selection.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the shifted date overflows the calendar.
    pub fn shift_select_start(&self, day: NaiveDate) -> Result<NaiveDate, TripMapError> {
        shift(day, self.select_start_days)
    }
}

fn shift(day: NaiveDate, days: u64) -> Result<NaiveDate, TripMapError> {
    day.checked_add_days(Days::new(days))
        .ok_or_else(|| TripMapError::InvalidArg(format!("{day} + {days} days overflows")))
}
