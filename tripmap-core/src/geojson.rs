//! GeoJSON `FeatureCollection` loading for the stops and routes datasets.
//!
//! Each feature's `properties` must carry `date`, `day_label`, `description`
//! and `color`. The Italian column names `Giorno` and `Descrizione` are
//! accepted as aliases.

use std::path::Path;

use chrono::NaiveDate;
use geojson::{Feature, GeoJson, Value};
use tripmap_types::TripMapError;

use crate::calendar::timestamp::parse_widget_timestamp;
use crate::event::{EventKind, Geometry, Position, TripEvent};

/// Read a GeoJSON file and convert its features into trip events.
///
/// # Errors
/// Returns `Io` if the file cannot be read and `Data` if it is not a valid
/// feature collection of supported geometries.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "tripmap::geojson::load_features", skip(path), fields(path = %path.as_ref().display()))
)]
pub fn load_features(path: impl AsRef<Path>, kind: EventKind) -> Result<Vec<TripEvent>, TripMapError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| TripMapError::io(path, &e))?;
    parse_features(&text, kind).map_err(|e| match e {
        TripMapError::Data(msg) => TripMapError::Data(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Parse GeoJSON text into trip events tagged with `kind`.
///
/// # Errors
/// Returns `Data` naming the offending feature index on any invalid feature.
pub fn parse_features(text: &str, kind: EventKind) -> Result<Vec<TripEvent>, TripMapError> {
    let geojson: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| TripMapError::Data(e.to_string()))?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(TripMapError::Data("expected a FeatureCollection".into()));
    };

    collection
        .features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            convert(feature, kind).map_err(|msg| TripMapError::Data(format!("feature {idx}: {msg}")))
        })
        .collect()
}

fn convert(feature: &Feature, kind: EventKind) -> Result<TripEvent, String> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| "missing geometry".to_string())?;
    Ok(TripEvent {
        date: parse_trip_date(&text_property(feature, &["date"])?)?,
        day_label: text_property(feature, &["day_label", "Giorno"])?,
        description: text_property(feature, &["description", "Descrizione"])?,
        color_category: text_property(feature, &["color", "color_category"])?,
        geometry: convert_geometry(&geometry.value)?,
        kind,
    })
}

/// First non-null property among `names`, which must be a string.
fn text_property(feature: &Feature, names: &[&str]) -> Result<String, String> {
    let name = names.first().copied().unwrap_or_default();
    match names
        .iter()
        .find_map(|n| feature.property(n).filter(|v| !v.is_null()))
    {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("property `{name}` is not a string: {other}")),
        None => Err(format!("missing property `{name}`")),
    }
}

/// Parse a trip date written as `YYYY-MM-DD`, `DD-MM-YYYY`, or a timestamp.
fn parse_trip_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%d-%m-%Y") {
        return Ok(d);
    }
    parse_widget_timestamp(raw, None)
        .map(|ts| ts.date())
        .map_err(|_| format!("unrecognized date {raw:?}"))
}

fn position(coords: &[f64]) -> Result<Position, String> {
    match coords {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Ok(Position::new(*lon, *lat)),
        _ => Err(format!("invalid position {coords:?}")),
    }
}

fn line(coords: &[Vec<f64>]) -> Result<Vec<Position>, String> {
    coords.iter().map(|c| position(c)).collect()
}

fn convert_geometry(value: &Value) -> Result<Geometry, String> {
    let pts = match value {
        Value::Point(coords) => return position(coords).map(Geometry::Point),
        Value::LineString(coords) => line(coords)?,
        Value::MultiLineString(parts) => {
            let mut pts = Vec::new();
            for part in parts {
                pts.extend(line(part)?);
            }
            pts
        }
        _ => return Err("unsupported geometry type".into()),
    };
    if pts.len() < 2 {
        return Err("line needs at least two positions".into());
    }
    Ok(Geometry::LineString(pts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_date_layouts() {
        let want = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
        assert_eq!(parse_trip_date("2025-03-08").unwrap(), want);
        assert_eq!(parse_trip_date("08-03-2025").unwrap(), want);
        assert_eq!(parse_trip_date("2025-03-08T00:00:00").unwrap(), want);
        assert!(parse_trip_date("March 8").is_err());
    }

    #[test]
    fn altitude_is_ignored() {
        let p = position(&[139.7, 35.6, 40.0]).unwrap();
        assert_eq!(p, Position::new(139.7, 35.6));
        assert!(position(&[139.7]).is_err());
    }
}
