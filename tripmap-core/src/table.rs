use chrono::NaiveDate;
use tripmap_types::{DateRange, TripMapError};

use crate::event::TripEvent;

/// Immutable trip table ordered ascending by date.
///
/// Events sharing a date keep their input order, so stops loaded before
/// routes stay ahead of them on the same day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    events: Vec<TripEvent>,
}

impl TripTable {
    /// Build a table from events in any order.
    #[must_use]
    pub fn new(mut events: Vec<TripEvent>) -> Self {
        events.sort_by_key(|e| e.date);
        Self { events }
    }

    /// All events, sorted by date.
    #[must_use]
    pub fn events(&self) -> &[TripEvent] {
        &self.events
    }

    /// Event dates in table order (ascending, possibly repeated).
    pub fn dates(&self) -> impl ExactSizeIterator<Item = NaiveDate> + '_ {
        self.events.iter().map(|e| e.date)
    }

    /// Full date span of the table, or `None` when empty.
    #[must_use]
    pub fn span(&self) -> Option<DateRange> {
        let first = self.events.first()?.date;
        let last = self.events.last()?.date;
        DateRange::new(first, last).ok()
    }

    /// Events whose date falls inside `range` (inclusive on both ends).
    ///
    /// Ranges outside the table yield an empty slice.
    #[must_use]
    pub fn slice(&self, range: &DateRange) -> &[TripEvent] {
        let lo = self.events.partition_point(|e| e.date < range.start());
        let hi = self.events.partition_point(|e| e.date <= range.end());
        &self.events[lo..hi.max(lo)]
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Merge stops and routes into a single table sorted by date.
///
/// Stops come before routes on equal dates.
#[must_use]
pub fn merge_trip_data<P, R>(points: P, routes: R) -> TripTable
where
    P: IntoIterator<Item = TripEvent>,
    R: IntoIterator<Item = TripEvent>,
{
    TripTable::new(points.into_iter().chain(routes).collect())
}

/// Default display range over a sequence of trip dates: `(min, max)`.
///
/// # Errors
/// Returns `NoTripData` if `dates` is empty.
pub fn default_range<I>(dates: I) -> Result<DateRange, TripMapError>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut iter = dates.into_iter();
    let first = iter.next().ok_or(TripMapError::NoTripData)?;
    let (min, max) = iter.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    DateRange::new(min, max)
}
