use chrono::NaiveDate;
use tripmap_core::{
    DateRange, EventKind, Geometry, Position, TripEvent, TripTable, default_range, merge_trip_data,
};

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

fn ev(date: NaiveDate, label: &str, kind: EventKind) -> TripEvent {
    TripEvent {
        date,
        day_label: label.to_string(),
        description: format!("{label} description"),
        color_category: "red".to_string(),
        geometry: Geometry::Point(Position::new(139.77, 35.69)),
        kind,
    }
}

fn table() -> TripTable {
    merge_trip_data(
        [
            ev(d(3, 28), "Tokyo", EventKind::Stop),
            ev(d(3, 3), "Hong Kong", EventKind::Stop),
            ev(d(3, 8), "Takamatsu", EventKind::Stop),
        ],
        [
            ev(d(3, 8), "HK-Takamatsu", EventKind::Route),
            ev(d(3, 28), "Tokyo-HK", EventKind::Route),
        ],
    )
}

#[test]
fn merge_sorts_by_date_with_stops_first_on_ties() {
    let t = table();
    let labels: Vec<&str> = t.events().iter().map(|e| e.day_label.as_str()).collect();
    assert_eq!(
        labels,
        ["Hong Kong", "Takamatsu", "HK-Takamatsu", "Tokyo", "Tokyo-HK"]
    );
    assert_eq!(t.span(), Some(DateRange::new(d(3, 3), d(3, 28)).unwrap()));
    assert_eq!(default_range(t.dates()).unwrap(), t.span().unwrap());
}

#[test]
fn slice_is_inclusive_on_both_ends() {
    let t = table();
    let r = DateRange::new(d(3, 8), d(3, 28)).unwrap();
    assert_eq!(t.slice(&r).len(), 4);
    assert_eq!(t.slice(&DateRange::single(d(3, 8))).len(), 2);
}

#[test]
fn slice_outside_span_is_empty() {
    let t = table();
    assert!(t.slice(&DateRange::single(d(3, 9))).is_empty());
    assert!(t.slice(&DateRange::new(d(4, 1), d(4, 30)).unwrap()).is_empty());
    assert!(t.slice(&DateRange::new(d(1, 1), d(3, 2)).unwrap()).is_empty());
}

#[test]
fn empty_table_has_no_span_and_slices_empty() {
    let t = TripTable::default();
    assert!(t.is_empty());
    assert_eq!(t.span(), None);
    assert!(t.slice(&DateRange::single(d(3, 8))).is_empty());
}
