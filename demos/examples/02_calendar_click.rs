use serde_json::json;
use tripmap::{TripMap, has_selection};
use tripmap_demos::common::get_source;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let trip = TripMap::builder()
        .with_source(get_source())
        .timezone("Asia/Tokyo")
        .build()?;

    let states = [
        json!({ "dateClick": { "date": "2025-03-07" } }),
        json!({ "eventClick": { "event": {
            "start": "2025-03-14T00:00:00+09:00",
            "end": "2025-03-15T00:00:00+09:00",
        } } }),
        json!({ "select": { "start": "2025-03-07", "end": "2025-03-14" } }),
        json!({ "date_click": { "date": "2025-03-07" }, "select": { "start": "2025-03-01", "end": "2025-03-05" } }),
    ];

    for state in &states {
        let view = trip.refresh(state);
        println!(
            "selection={} range={} origin={} events={}",
            has_selection(state),
            view.range,
            serde_json::to_string(&view.origin)?,
            view.events.len()
        );
    }

    Ok(())
}
