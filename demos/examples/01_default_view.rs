use serde_json::json;
use tripmap::TripMap;
use tripmap_demos::common::get_source;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Pick a source (mock in CI when TRIPMAP_DEMOS_USE_MOCK is set).
    let source = get_source();

    // 2. Load the trip.
    let trip = TripMap::builder().with_source(source).build()?;
    println!("{} ({})", trip.title(), trip.subtitle());

    // 3. With nothing selected the whole trip is shown.
    let view = trip.refresh(&json!({}));
    println!("range: {}", view.range);
    for event in view.events {
        println!("  {} {:<6} {}", event.date, format!("{:?}", event.kind), event.description);
    }
    println!("features on map: {}", view.map.feature_count());

    Ok(())
}
