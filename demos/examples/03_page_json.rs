use serde_json::json;
use tripmap::TripMap;
use tripmap_demos::common::get_source;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let trip = TripMap::builder().with_source(get_source()).build()?;

    // The document a display shell would hand to its calendar and map widgets.
    let page = trip.page(&json!({ "date_click": { "date": "2025-03-27" } }));
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
