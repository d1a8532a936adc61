use serde::Serialize;
use tripmap_core::{DateRange, RangeOrigin, RenderedMap, TripEvent};

/// Everything the display shell needs after one refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripView<'a> {
    /// Inclusive range being displayed.
    pub range: DateRange,
    /// Whether `range` is the default span, a selection, or a fallback.
    pub origin: RangeOrigin,
    /// Trip events inside `range`, sorted by date. May be empty.
    pub events: &'a [TripEvent],
    /// Map layer for `events`.
    pub map: RenderedMap,
}

impl TripView<'_> {
    /// Returns true if the view shows the full trip span because nothing usable was selected.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self.origin, RangeOrigin::Default | RangeOrigin::Fallback { .. })
    }
}
