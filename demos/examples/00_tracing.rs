use serde_json::json;
use tripmap::TripMap;
use tripmap_demos::common::get_source;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tripmap=debug,tripmap_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let trip = TripMap::builder().with_source(get_source()).build()?;

    // Idle, clicked, and a malformed payload that falls back to the full span.
    let _ = trip.refresh(&json!({}));
    let _ = trip.refresh(&json!({ "date_click": { "date": "2025-03-07" } }));
    let _ = trip.refresh(&json!({ "select": { "start": "2025-03-10" } }));

    tracing::info!("done");
    Ok(())
}
