use chrono::NaiveDate;
use serde_json::json;
use tripmap_core::{
    Bounds, CalendarOptions, EventKind, GeoJsonRenderer, Geometry, MapRenderer, MapStyle,
    Position, TripEvent, TripTable, calendar_events,
};

fn stop(day: u32, lon: f64, lat: f64, color: &str) -> TripEvent {
    TripEvent {
        date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        day_label: format!("Giorno {day}"),
        description: format!("Tappa {day}"),
        color_category: color.to_string(),
        geometry: Geometry::Point(Position::new(lon, lat)),
        kind: EventKind::Stop,
    }
}

fn table() -> TripTable {
    TripTable::new(vec![
        stop(8, 134.04, 34.34, "red"),
        stop(3, 114.16, 22.30, "blue"),
        TripEvent {
            geometry: Geometry::LineString(vec![Position::new(114.16, 22.30), Position::new(139.77, 35.69)]),
            kind: EventKind::Route,
            ..stop(28, 0.0, 0.0, "green")
        },
    ])
}

#[test]
fn renders_styled_features_and_bounds() {
    let t = table();
    let map = GeoJsonRenderer.render(t.events(), &MapStyle::default());

    assert_eq!(map.feature_count(), 3);
    assert_eq!(map.tiles, "CartoDB positron");
    assert_eq!((map.width, map.height), (1400, 700));

    let first = &map.layer.features[0];
    assert_eq!(first.property("color"), Some(&json!("blue")));
    assert_eq!(first.property("date"), Some(&json!("2025-03-03")));
    let html = first.property("html").and_then(|v| v.as_str()).unwrap();
    assert!(html.contains("fa-location-dot") && html.contains("color:blue") && html.contains("font-size:30px"));
    assert!(matches!(
        map.layer.features[2].geometry.as_ref().map(|g| &g.value),
        Some(geojson::Value::LineString(line)) if line.len() == 2
    ));

    let b = map.bounds.unwrap();
    assert_eq!(b.lat_lon_corners(), [[22.30, 114.16], [35.69, 139.77]]);
    assert_eq!(map.layer.bbox, Some(vec![114.16, 22.30, 139.77, 35.69]));

    let doc = serde_json::to_value(&map.layer).unwrap();
    assert_eq!(doc["type"], "FeatureCollection");
    assert_eq!(doc["popup"], json!(["day_label", "description"]));
    assert_eq!(doc["tooltip"], false);
}

#[test]
fn empty_slice_renders_empty_layer() {
    let map = GeoJsonRenderer.render(&[], &MapStyle::default());
    assert_eq!(map.feature_count(), 0);
    assert!(map.bounds.is_none());
    assert!(map.layer.bbox.is_none());
    assert!(Bounds::of(&[]).is_none());
}

#[test]
fn calendar_feed_has_one_entry_per_event() {
    let t = table();
    let feed = calendar_events(&t);
    assert_eq!(feed.len(), t.len());
    assert_eq!(feed[0].title, "Giorno 3: Tappa 3");
    assert!(feed.iter().all(|e| e.start == e.end && e.all_day));

    let json = serde_json::to_value(&feed[1]).unwrap();
    assert_eq!(json["backgroundColor"], "red");
    assert_eq!(json["allDay"], true);

    let opts = serde_json::to_value(CalendarOptions::for_table(&t)).unwrap();
    assert_eq!(opts["initialDate"], "2025-03-03");
    assert_eq!(opts["initialView"], "dayGridMonth");
    assert_eq!(opts["selectable"], true);
}
