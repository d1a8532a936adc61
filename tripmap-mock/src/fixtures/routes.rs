use tripmap_core::{EventKind, Geometry, Position, TripEvent};

use super::day;

pub fn itinerary() -> Vec<TripEvent> {
    vec![
        route(
            "2025-03-08",
            "Giorno 6",
            "Volo Hong Kong - Takamatsu",
            "red",
            &[(114.16027652699938, 22.30331384402351), (134.04667994580566, 34.34206545290941)],
        ),
        route(
            "2025-03-28",
            "Giorno 26",
            "Volo Tokyo - Hong Kong",
            "purple",
            &[(139.77162061039544, 35.69666162802782), (114.16027652699938, 22.30331384402351)],
        ),
    ]
}

fn route(date: &str, label: &str, desc: &str, color: &str, path: &[(f64, f64)]) -> TripEvent {
    TripEvent {
        date: day(date),
        day_label: label.to_string(),
        description: desc.to_string(),
        color_category: color.to_string(),
        geometry: Geometry::LineString(path.iter().map(|&(lon, lat)| Position::new(lon, lat)).collect()),
        kind: EventKind::Route,
    }
}
