use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tripmap workspace.
///
/// This covers startup configuration failures, input file problems, and the
/// recoverable conditions raised while interpreting calendar interactions.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TripMapError {
    /// No trip dates were available to derive the default date range.
    #[error("no trip data loaded: cannot derive a default date range")]
    NoTripData,

    /// A date range was requested but the interaction state carries no selection.
    #[error("calendar state carries no selection")]
    NoSelection,

    /// More than one recognized interaction key was present at once.
    #[error("ambiguous calendar selection: {keys:?}")]
    AmbiguousSelection {
        /// The recognized keys found in the state, in key order.
        keys: Vec<String>,
    },

    /// The payload under a recognized key lacks or mangles an expected field.
    #[error("malformed {kind} payload: {reason}")]
    MalformedInteraction {
        /// Interaction kind label (e.g. "date_click").
        kind: String,
        /// Human-readable description of what is wrong.
        reason: String,
    },

    /// A resolved range would start after it ends.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },

    /// An input file could not be read.
    #[error("cannot read {path}: {msg}")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// Underlying I/O error message.
        msg: String,
    },

    /// Issues with the loaded trip data (bad geometry, missing properties, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl TripMapError {
    /// Helper: build a `MalformedInteraction` error.
    pub fn malformed(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInteraction {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build an `Io` error from a path and the underlying error.
    pub fn io(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            msg: err.to_string(),
        }
    }

    /// Returns true if a display shell may recover by showing the default range.
    ///
    /// Interaction problems are recoverable; loading and configuration
    /// failures are not.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoSelection
                | Self::AmbiguousSelection { .. }
                | Self::MalformedInteraction { .. }
                | Self::InvalidRange { .. }
        )
    }
}
