//! Map layer rendering for a slice of trip events.

use geojson::{Feature, FeatureCollection, JsonObject, JsonValue, Value};
use serde::Serialize;
use tripmap_types::MapStyle;

use crate::event::{Geometry, Position, TripEvent};

/// Properties listed in each feature's popup, in display order.
pub const POPUP_FIELDS: [&str; 2] = ["day_label", "description"];

/// Geographic bounding box of a rendered slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// South-west corner.
    pub min: Position,
    /// North-east corner.
    pub max: Position,
}

impl Bounds {
    /// Smallest box containing every vertex of `events`, or `None` if there are none.
    #[must_use]
    pub fn of(events: &[TripEvent]) -> Option<Self> {
        let mut it = events.iter().flat_map(|e| e.geometry.positions());
        let first = *it.next()?;
        Some(it.fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: Position::new(b.min.lon.min(p.lon), b.min.lat.min(p.lat)),
                max: Position::new(b.max.lon.max(p.lon), b.max.lat.max(p.lat)),
            },
        ))
    }

    /// Corners as `[[lat, lon], [lat, lon]]`, the order web map widgets expect.
    #[must_use]
    pub const fn lat_lon_corners(&self) -> [[f64; 2]; 2] {
        [[self.min.lat, self.min.lon], [self.max.lat, self.max.lon]]
    }

    /// GeoJSON `bbox` member: `[min_lon, min_lat, max_lon, max_lat]`.
    #[must_use]
    pub fn bbox(&self) -> Vec<f64> {
        vec![self.min.lon, self.min.lat, self.max.lon, self.max.lat]
    }
}

/// A styled map layer ready to hand to the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMap {
    /// Feature collection with per-feature style properties.
    pub layer: FeatureCollection,
    /// Tile set name.
    pub tiles: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Extent of the features, `None` for an empty slice.
    pub bounds: Option<Bounds>,
}

impl RenderedMap {
    /// Number of features in the layer.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.layer.features.len()
    }
}

/// Produces a map object from a slice of the trip table.
pub trait MapRenderer {
    /// Render `events` with `style`. Must accept an empty slice.
    fn render(&self, events: &[TripEvent], style: &MapStyle) -> RenderedMap;
}

/// Renders trip events as a styled GeoJSON layer with location-pin markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonRenderer;

impl GeoJsonRenderer {
    fn marker_html(color: &str, size_px: u32) -> String {
        format!(
            r#"<span class="fa-solid fa-location-dot" style="color:{color};font-size:{size_px}px"></span>"#
        )
    }

    fn geometry(g: &Geometry) -> geojson::Geometry {
        let coords = |p: &Position| vec![p.lon, p.lat];
        geojson::Geometry::new(match g {
            Geometry::Point(p) => Value::Point(coords(p)),
            Geometry::LineString(line) => Value::LineString(line.iter().map(coords).collect()),
        })
    }

    fn feature(e: &TripEvent, style: &MapStyle) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("date".into(), e.date.to_string().into());
        properties.insert("day_label".into(), e.day_label.clone().into());
        properties.insert("description".into(), e.description.clone().into());
        properties.insert("color".into(), e.color_category.clone().into());
        properties.insert(
            "html".into(),
            Self::marker_html(&e.color_category, style.marker_size_px).into(),
        );
        Feature {
            bbox: None,
            geometry: Some(Self::geometry(&e.geometry)),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl MapRenderer for GeoJsonRenderer {
    fn render(&self, events: &[TripEvent], style: &MapStyle) -> RenderedMap {
        let bounds = Bounds::of(events);

        let mut widget = JsonObject::new();
        widget.insert(
            "popup".into(),
            JsonValue::from(POPUP_FIELDS.map(JsonValue::from).to_vec()),
        );
        widget.insert("tooltip".into(), JsonValue::Bool(false));

        RenderedMap {
            layer: FeatureCollection {
                bbox: bounds.as_ref().map(Bounds::bbox),
                features: events.iter().map(|e| Self::feature(e, style)).collect(),
                foreign_members: Some(widget),
            },
            tiles: style.tiles.clone(),
            width: style.width,
            height: style.height,
            bounds,
        }
    }
}
