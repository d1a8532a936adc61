use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use tripmap_types::TripMapError;

const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp as emitted by the calendar widget.
///
/// Accepted forms:
/// - RFC 3339 with `Z` or a numeric offset (`2025-03-06T23:00:00.000Z`)
/// - naive date-time (`2025-03-08T09:25:00`, optional fraction, optional seconds)
/// - bare date (`2025-03-10`), read as midnight
///
/// Offset-bearing values keep their wall-clock reading unless `tz` is given,
/// in which case they are converted into `tz` first. Naive values are never
/// shifted.
///
/// # Errors
/// Returns `InvalidArg` if `raw` matches none of the accepted forms.
pub fn parse_widget_timestamp(raw: &str, tz: Option<Tz>) -> Result<NaiveDateTime, TripMapError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(match tz {
            Some(tz) => dt.with_timezone(&tz).naive_local(),
            None => dt.naive_local(),
        });
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(ndt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| TripMapError::InvalidArg(format!("unrecognized timestamp {raw:?}")))
}

/// Parse an IANA timezone name such as `Asia/Tokyo`.
///
/// # Errors
/// Returns `InvalidArg` for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz, TripMapError> {
    name.parse::<Tz>()
        .map_err(|_| TripMapError::InvalidArg(format!("unknown timezone {name:?}")))
}
