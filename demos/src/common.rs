use std::path::PathBuf;
use std::sync::Arc;

use tripmap_core::{GeoJsonSource, TripSource};

/// Return a trip source for the demos.
///
/// With `TRIPMAP_DEMOS_USE_MOCK` set the built-in mock itinerary is used.
/// Otherwise `points.json` and `routes.json` are read from `TRIPMAP_DATA_DIR`,
/// falling back to the bundled `demos/data` directory.
#[must_use]
pub fn get_source() -> Arc<dyn TripSource> {
    if std::env::var("TRIPMAP_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Arc::new(tripmap_mock::MockSource::new())
    } else {
        let dir = data_dir();
        Arc::new(GeoJsonSource::new(
            dir.join("points.json"),
            dir.join("routes.json"),
        ))
    }
}

/// Directory holding the demo GeoJSON files.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var_os("TRIPMAP_DATA_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        PathBuf::from,
    )
}
