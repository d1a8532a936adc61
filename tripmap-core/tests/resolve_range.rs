use chrono::NaiveDate;
use serde_json::json;
use tripmap_core::{
    DateRange, DateRangeResolver, DayOffsetPolicy, InteractionKind, RangeOrigin, TripMapError,
    has_selection, resolve_range,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn range(a: NaiveDate, b: NaiveDate) -> DateRange {
    DateRange::new(a, b).unwrap()
}

fn trip_resolver() -> DateRangeResolver {
    DateRangeResolver::new(range(d(2025, 3, 3), d(2025, 3, 28)), DayOffsetPolicy::default())
}

#[test]
fn date_click_advances_one_day_on_both_ends() {
    let state = json!({ "date_click": { "date": "2025-03-10" } });
    let got = resolve_range(&state, &DayOffsetPolicy::default()).unwrap();
    assert_eq!(got, range(d(2025, 3, 11), d(2025, 3, 11)));
}

#[test]
fn event_click_truncates_without_offset() {
    let state = json!({
        "event_click": { "start": "2025-03-08T09:25:00", "end": "2025-03-08T13:45:00" }
    });
    let got = resolve_range(&state, &DayOffsetPolicy::default()).unwrap();
    assert_eq!(got, range(d(2025, 3, 8), d(2025, 3, 8)));
}

#[test]
fn select_offsets_start_only() {
    let state = json!({
        "select": { "start": "2025-03-05T00:00:00", "end": "2025-03-07T00:00:00" }
    });
    let got = resolve_range(&state, &DayOffsetPolicy::default()).unwrap();
    assert_eq!(got, range(d(2025, 3, 6), d(2025, 3, 7)));
}

#[test]
fn widget_spellings_resolve_like_canonical_keys() {
    let policy = DayOffsetPolicy::default();
    let native_click = json!({ "callback": "dateClick", "dateClick": { "date": "2025-03-10T00:00:00", "allDay": true } });
    assert_eq!(
        resolve_range(&native_click, &policy).unwrap(),
        range(d(2025, 3, 11), d(2025, 3, 11))
    );

    let nested_event = json!({
        "eventClick": { "event": { "title": "Giorno 6", "start": "2025-03-08", "end": "2025-03-08" } }
    });
    assert_eq!(
        resolve_range(&nested_event, &policy).unwrap(),
        range(d(2025, 3, 8), d(2025, 3, 8))
    );
}

#[test]
fn nested_event_without_end_covers_its_start_day() {
    let policy = DayOffsetPolicy::default();
    let all_day = json!({
        "eventClick": { "event": { "title": "Giorno 12: Kyoto", "start": "2025-03-14", "allDay": true } }
    });
    assert_eq!(
        resolve_range(&all_day, &policy).unwrap(),
        range(d(2025, 3, 14), d(2025, 3, 14))
    );

    let null_end = json!({ "event_click": { "event": { "start": "2025-03-14", "end": null } } });
    assert_eq!(
        resolve_range(&null_end, &policy).unwrap(),
        range(d(2025, 3, 14), d(2025, 3, 14))
    );

    let flat = json!({ "event_click": { "start": "2025-03-14" } });
    assert!(matches!(
        resolve_range(&flat, &policy).unwrap_err(),
        TripMapError::MalformedInteraction { .. }
    ));
}

#[test]
fn null_payloads_still_count_as_keys() {
    let policy = DayOffsetPolicy::default();

    let lone_null = json!({ "date_click": null });
    assert!(has_selection(&lone_null));
    assert!(matches!(
        resolve_range(&lone_null, &policy).unwrap_err(),
        TripMapError::MalformedInteraction { ref kind, .. } if kind == "date_click"
    ));

    let click_and_null = json!({ "date_click": { "date": "2025-03-10" }, "select": null });
    assert!(!has_selection(&click_and_null));
    assert!(matches!(
        resolve_range(&click_and_null, &policy).unwrap_err(),
        TripMapError::AmbiguousSelection { keys } if keys.len() == 2
    ));

    let resolver = trip_resolver();
    let lenient = resolver.resolve(&click_and_null);
    assert_eq!(lenient.range, resolver.default_range());
    assert_eq!(lenient.origin, RangeOrigin::Default);

    let lenient = resolver.resolve(&lone_null);
    assert_eq!(lenient.range, resolver.default_range());
    assert!(matches!(
        lenient.origin,
        RangeOrigin::Fallback { reason: TripMapError::MalformedInteraction { .. } }
    ));
}

#[test]
fn resolve_is_pure() {
    let state = json!({ "select": { "start": "2025-03-05", "end": "2025-03-09" } });
    let policy = DayOffsetPolicy::default();
    let first = resolve_range(&state, &policy).unwrap();
    let second = resolve_range(&state, &policy).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disabled_compensation_takes_dates_at_face_value() {
    let state = json!({ "date_click": { "date": "2025-03-10" } });
    let got = resolve_range(&state, &DayOffsetPolicy::none()).unwrap();
    assert_eq!(got, range(d(2025, 3, 10), d(2025, 3, 10)));
}

#[test]
fn precondition_violations_fail_fast() {
    let policy = DayOffsetPolicy::default();
    assert_eq!(
        resolve_range(&json!({}), &policy).unwrap_err(),
        TripMapError::NoSelection
    );
    let both = json!({
        "date_click": { "date": "2025-03-10" },
        "select": { "start": "2025-03-05", "end": "2025-03-07" }
    });
    assert!(!has_selection(&both));
    assert!(matches!(
        resolve_range(&both, &policy).unwrap_err(),
        TripMapError::AmbiguousSelection { keys } if keys.len() == 2
    ));
}

#[test]
fn malformed_payloads_are_explicit_errors() {
    let policy = DayOffsetPolicy::default();
    for state in [
        json!({ "date_click": {} }),
        json!({ "date_click": { "date": 20250310 } }),
        json!({ "event_click": { "start": "2025-03-08T09:25:00" } }),
        json!({ "select": { "start": "not a date", "end": "2025-03-07" } }),
        json!({ "select": "2025-03-05" }),
    ] {
        let err = resolve_range(&state, &policy).unwrap_err();
        assert!(
            matches!(err, TripMapError::MalformedInteraction { .. }),
            "{state} gave {err:?}"
        );
    }
}

#[test]
fn same_day_timegrid_select_is_an_invalid_range() {
    let state = json!({ "select": { "start": "2025-03-05T10:00:00", "end": "2025-03-05T12:00:00" } });
    let err = resolve_range(&state, &DayOffsetPolicy::default()).unwrap_err();
    assert_eq!(
        err,
        TripMapError::InvalidRange {
            start: d(2025, 3, 6),
            end: d(2025, 3, 5)
        }
    );
}

#[test]
fn end_to_end_default_then_click() {
    let resolver = trip_resolver();

    let idle = resolver.resolve(&json!({}));
    assert_eq!(idle.range, range(d(2025, 3, 3), d(2025, 3, 28)));
    assert_eq!(idle.origin, RangeOrigin::Default);

    let clicked = resolver.resolve(&json!({ "date_click": { "date": "2025-03-07" } }));
    assert_eq!(clicked.range, range(d(2025, 3, 8), d(2025, 3, 8)));
    assert_eq!(clicked.origin, RangeOrigin::Selection(InteractionKind::DateClick));
}

#[test]
fn lenient_resolve_falls_back_to_default() {
    let resolver = trip_resolver();

    let ambiguous = resolver.resolve(&json!({
        "date_click": { "date": "2025-03-10" },
        "event_click": { "start": "2025-03-08", "end": "2025-03-08" }
    }));
    assert_eq!(ambiguous.origin, RangeOrigin::Default);

    let not_a_map = resolver.resolve(&json!(null));
    assert_eq!(not_a_map.origin, RangeOrigin::Default);

    let malformed = resolver.resolve(&json!({ "select": { "start": "2025-03-05" } }));
    assert_eq!(malformed.range, resolver.default_range());
    assert!(matches!(
        malformed.origin,
        RangeOrigin::Fallback { reason: TripMapError::MalformedInteraction { .. } }
    ));
}

#[test]
fn timezone_applies_only_to_offset_stamps() {
    let tokyo = tripmap_core::calendar::parse_timezone("Asia/Tokyo").unwrap();
    let resolver = trip_resolver().with_timezone(Some(tokyo));

    let utc_click = json!({ "dateClick": { "date": "2025-03-06T23:00:00.000Z" } });
    assert_eq!(
        resolver.resolve_strict(&utc_click).unwrap(),
        range(d(2025, 3, 8), d(2025, 3, 8))
    );

    let naive_click = json!({ "date_click": { "date": "2025-03-06T23:00:00" } });
    assert_eq!(
        resolver.resolve_strict(&naive_click).unwrap(),
        range(d(2025, 3, 7), d(2025, 3, 7))
    );
}
