use core::fmt;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tripmap_types::TripMapError;

use super::timestamp::parse_widget_timestamp;

/// The three interactions the calendar widget reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A single day cell was clicked.
    DateClick,
    /// An existing calendar event was clicked.
    EventClick,
    /// A range of days was dragged.
    Select,
}

impl InteractionKind {
    /// Every kind, in key order.
    pub const ALL: [Self; 3] = [Self::DateClick, Self::EventClick, Self::Select];

    /// Canonical state key for this kind.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DateClick => "date_click",
            Self::EventClick => "event_click",
            Self::Select => "select",
        }
    }

    /// Spelling the widget itself uses for this key.
    const fn widget_key(self) -> &'static str {
        match self {
            Self::DateClick => "dateClick",
            Self::EventClick => "eventClick",
            Self::Select => "select",
        }
    }

    /// Map a state key (canonical or widget spelling) to its kind.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == key || k.widget_key() == key)
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Calendar interaction state after validation at the widget boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarSelection {
    /// Nothing selected this refresh.
    #[default]
    NoSelection,
    /// A day cell was clicked.
    DateClick {
        /// Reported click instant.
        date: NaiveDateTime,
    },
    /// An existing calendar event was clicked.
    EventClick {
        /// Event start.
        start: NaiveDateTime,
        /// Event end.
        end: NaiveDateTime,
    },
    /// A range of days was dragged.
    RangeSelect {
        /// Reported selection start.
        start: NaiveDateTime,
        /// Reported selection end.
        end: NaiveDateTime,
    },
}

impl CalendarSelection {
    /// Interaction kind, or `None` for `NoSelection`.
    #[must_use]
    pub const fn kind(&self) -> Option<InteractionKind> {
        match self {
            Self::NoSelection => None,
            Self::DateClick { .. } => Some(InteractionKind::DateClick),
            Self::EventClick { .. } => Some(InteractionKind::EventClick),
            Self::RangeSelect { .. } => Some(InteractionKind::Select),
        }
    }
}

/// Recognized interaction entries of `state`. Key presence alone counts,
/// whatever the payload; non-object states contribute nothing.
fn recognized(state: &Value) -> Vec<(&str, InteractionKind, &Value)> {
    let Some(map) = state.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(key, payload)| {
            InteractionKind::from_key(key).map(|kind| (key.as_str(), kind, payload))
        })
        .collect()
}

/// Returns true iff `state` holds exactly one recognized interaction key.
#[must_use]
pub fn has_selection(state: &Value) -> bool {
    recognized(state).len() == 1
}

/// Validate widget state into a [`CalendarSelection`].
///
/// No key, or more than one key, yields `NoSelection`: both mean the
/// default range should be shown.
///
/// # Errors
/// Returns `MalformedInteraction` when the single recognized key carries a
/// payload without the expected `date` / `start` / `end` fields.
pub fn parse_interaction(state: &Value, tz: Option<Tz>) -> Result<CalendarSelection, TripMapError> {
    match recognized(state).as_slice() {
        [(_, kind, payload)] => parse_payload(*kind, payload, tz),
        [] => Ok(CalendarSelection::NoSelection),
        _many => {
            #[cfg(feature = "tracing")]
            {
                let keys: Vec<&str> = _many.iter().map(|(k, _, _)| *k).collect();
                tracing::debug!(?keys, "ambiguous calendar state; treating as no selection");
            }
            Ok(CalendarSelection::NoSelection)
        }
    }
}

/// Like [`parse_interaction`] but requires exactly one recognized key.
///
/// # Errors
/// - `NoSelection` when no recognized key is present.
/// - `AmbiguousSelection` when several are.
/// - `MalformedInteraction` for a bad payload.
pub fn parse_selection(state: &Value, tz: Option<Tz>) -> Result<CalendarSelection, TripMapError> {
    match recognized(state).as_slice() {
        [(_, kind, payload)] => parse_payload(*kind, payload, tz),
        [] => Err(TripMapError::NoSelection),
        many => Err(TripMapError::AmbiguousSelection {
            keys: many.iter().map(|(k, _, _)| (*k).to_string()).collect(),
        }),
    }
}

fn parse_payload(
    kind: InteractionKind,
    payload: &Value,
    tz: Option<Tz>,
) -> Result<CalendarSelection, TripMapError> {
    if !payload.is_object() {
        return Err(TripMapError::malformed(kind.key(), "payload is not an object"));
    }
    match kind {
        InteractionKind::DateClick => Ok(CalendarSelection::DateClick {
            date: field(kind, payload, "date", tz)?,
        }),
        InteractionKind::EventClick => match payload.get("event").filter(|v| v.is_object()) {
            // Widget-native form. Single-day all-day events arrive without an `end`.
            Some(event) => {
                let start = field(kind, event, "start", tz)?;
                let end = match event.get("end") {
                    None | Some(Value::Null) => start,
                    Some(_) => field(kind, event, "end", tz)?,
                };
                Ok(CalendarSelection::EventClick { start, end })
            }
            None => Ok(CalendarSelection::EventClick {
                start: field(kind, payload, "start", tz)?,
                end: field(kind, payload, "end", tz)?,
            }),
        },
        InteractionKind::Select => Ok(CalendarSelection::RangeSelect {
            start: field(kind, payload, "start", tz)?,
            end: field(kind, payload, "end", tz)?,
        }),
    }
}

fn field(
    kind: InteractionKind,
    payload: &Value,
    name: &str,
    tz: Option<Tz>,
) -> Result<NaiveDateTime, TripMapError> {
    let raw = match payload.get(name) {
        None | Some(Value::Null) => {
            return Err(TripMapError::malformed(kind.key(), format!("missing `{name}`")));
        }
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(TripMapError::malformed(
                kind.key(),
                format!("`{name}` is not a string: {other}"),
            ));
        }
    };
    parse_widget_timestamp(raw, tz).map_err(|_| {
        TripMapError::malformed(kind.key(), format!("unparseable `{name}`: {raw:?}"))
    })
}
