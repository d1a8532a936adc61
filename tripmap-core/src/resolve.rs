//! Date range resolution: calendar interaction state to an inclusive display range.
//!
//! Two states are modelled. With no selection the full trip span is shown;
//! once the widget reports an interaction the range is derived from it. Every
//! refresh starts over from the raw widget state.

use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;
use tripmap_types::{DateRange, DayOffsetPolicy, TripMapError};

use crate::calendar::{CalendarSelection, InteractionKind, parse_interaction, parse_selection};
use crate::table::{TripTable, default_range};

/// Turn a validated selection into a range.
///
/// - `DateClick`: both ends are the clicked day shifted by `policy.date_click_days`.
/// - `EventClick`: event start and end truncated to dates, unshifted.
/// - `RangeSelect`: start shifted by `policy.select_start_days`, end unshifted.
///
/// Returns `Ok(None)` for `NoSelection`.
///
/// # Errors
/// Returns `InvalidRange` if the resulting start falls after the end.
pub fn resolve_selection(
    selection: &CalendarSelection,
    policy: &DayOffsetPolicy,
) -> Result<Option<DateRange>, TripMapError> {
    let range = match *selection {
        CalendarSelection::NoSelection => return Ok(None),
        CalendarSelection::DateClick { date } => DateRange::single(policy.shift_click(date.date())?),
        CalendarSelection::EventClick { start, end } => DateRange::new(start.date(), end.date())?,
        CalendarSelection::RangeSelect { start, end } => {
            DateRange::new(policy.shift_select_start(start.date())?, end.date())?
        }
    };
    Ok(Some(range))
}

/// Resolve raw widget state that must carry exactly one interaction.
///
/// Callers should check [`has_selection`](crate::calendar::has_selection) first.
///
/// # Errors
/// - `NoSelection` / `AmbiguousSelection` when the precondition does not hold.
/// - `MalformedInteraction` for a payload missing its time fields.
/// - `InvalidRange` when the compensated start passes the end.
pub fn resolve_range(state: &Value, policy: &DayOffsetPolicy) -> Result<DateRange, TripMapError> {
    let selection = parse_selection(state, None)?;
    resolve_selection(&selection, policy)?.ok_or(TripMapError::NoSelection)
}

/// Where a displayed range came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOrigin {
    /// No interaction: the full trip span.
    Default,
    /// Derived from a calendar interaction.
    Selection(InteractionKind),
    /// The interaction could not be resolved; the full span is shown instead.
    Fallback {
        /// Why the interaction was discarded.
        reason: TripMapError,
    },
}

/// A display range together with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    /// Inclusive range to display.
    pub range: DateRange,
    /// How `range` was obtained.
    pub origin: RangeOrigin,
}

/// Resolves widget state against a fixed default range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeResolver {
    default: DateRange,
    policy: DayOffsetPolicy,
    timezone: Option<Tz>,
}

impl DateRangeResolver {
    /// Resolver falling back to `default`.
    #[must_use]
    pub const fn new(default: DateRange, policy: DayOffsetPolicy) -> Self {
        Self {
            default,
            policy,
            timezone: None,
        }
    }

    /// Resolver whose default is the full span of `table`.
    ///
    /// # Errors
    /// Returns `NoTripData` if the table is empty.
    pub fn for_table(table: &TripTable, policy: DayOffsetPolicy) -> Result<Self, TripMapError> {
        Ok(Self::new(default_range(table.dates())?, policy))
    }

    /// Convert offset-bearing widget timestamps into `tz` before truncation.
    #[must_use]
    pub const fn with_timezone(mut self, tz: Option<Tz>) -> Self {
        self.timezone = tz;
        self
    }

    /// The range shown when nothing is selected.
    #[must_use]
    pub const fn default_range(&self) -> DateRange {
        self.default
    }

    /// The day-offset policy in use.
    #[must_use]
    pub const fn policy(&self) -> &DayOffsetPolicy {
        &self.policy
    }

    /// Resolve state that must carry exactly one interaction, propagating failures.
    ///
    /// # Errors
    /// Same as [`resolve_range`].
    pub fn resolve_strict(&self, state: &Value) -> Result<DateRange, TripMapError> {
        let selection = parse_selection(state, self.timezone)?;
        resolve_selection(&selection, &self.policy)?.ok_or(TripMapError::NoSelection)
    }

    /// Resolve any widget state to a displayable range.
    ///
    /// Absent or ambiguous selections give the default range. Malformed or
    /// inverted selections also give the default range, with the discarded
    /// error recorded in the origin.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "tripmap::resolve", skip(self, state), fields(default = %self.default))
    )]
    #[must_use]
    pub fn resolve(&self, state: &Value) -> ResolvedRange {
        let outcome = parse_interaction(state, self.timezone).and_then(|selection| {
            resolve_selection(&selection, &self.policy).map(|r| r.zip(selection.kind()))
        });
        match outcome {
            Ok(Some((range, kind))) => ResolvedRange {
                range,
                origin: RangeOrigin::Selection(kind),
            },
            Ok(None) => ResolvedRange {
                range: self.default,
                origin: RangeOrigin::Default,
            },
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %reason, "discarding calendar selection; showing default range");
                ResolvedRange {
                    range: self.default,
                    origin: RangeOrigin::Fallback { reason },
                }
            }
        }
    }
}
