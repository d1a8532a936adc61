use tripmap_core::{EventKind, Geometry, Position, TripEvent};

use super::day;

pub fn itinerary() -> Vec<TripEvent> {
    build(vec![
        ("2025-03-03", "Giorno 1", "Arrivo a Hong Kong", "blue", 114.16027652699938, 22.30331384402351),
        ("2025-03-08", "Giorno 6", "Partenza da HK per Takamatsu", "red", 134.04667994580566, 34.34206545290941),
        ("2025-03-14", "Giorno 12", "Kyoto", "orange", 135.7681489, 35.0116363),
        ("2025-03-28", "Giorno 26", "Partenza da Tokyo per HK", "purple", 139.77162061039544, 35.69666162802782),
    ])
}

fn build(rows: Vec<(&str, &str, &str, &str, f64, f64)>) -> Vec<TripEvent> {
    rows.into_iter()
        .map(|(date, label, desc, color, lon, lat)| TripEvent {
            date: day(date),
            day_label: label.to_string(),
            description: desc.to_string(),
            color_category: color.to_string(),
            geometry: Geometry::Point(Position::new(lon, lat)),
            kind: EventKind::Stop,
        })
        .collect()
}
