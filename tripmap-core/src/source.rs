use std::path::PathBuf;

use tripmap_types::{TripMapConfig, TripMapError};

use crate::event::{EventKind, TripEvent};
use crate::geojson::load_features;
use crate::table::{TripTable, merge_trip_data};

/// Supplier of the two trip datasets.
pub trait TripSource: Send + Sync {
    /// A stable identifier for this source (e.g. "geojson-files").
    fn name(&self) -> &'static str;

    /// Load the stops dataset.
    ///
    /// # Errors
    /// Implementations return `Io` or `Data` when the dataset is unavailable or invalid.
    fn points(&self) -> Result<Vec<TripEvent>, TripMapError>;

    /// Load the routes dataset.
    ///
    /// # Errors
    /// Implementations return `Io` or `Data` when the dataset is unavailable or invalid.
    fn routes(&self) -> Result<Vec<TripEvent>, TripMapError>;
}

/// Reads stops and routes from two GeoJSON files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoJsonSource {
    points_path: PathBuf,
    routes_path: PathBuf,
}

impl GeoJsonSource {
    /// Source reading the given files.
    pub fn new(points_path: impl Into<PathBuf>, routes_path: impl Into<PathBuf>) -> Self {
        Self {
            points_path: points_path.into(),
            routes_path: routes_path.into(),
        }
    }

    /// Source reading `data_dir/points_file` and `data_dir/routes_file`.
    #[must_use]
    pub fn from_config(cfg: &TripMapConfig) -> Self {
        Self::new(cfg.points_path(), cfg.routes_path())
    }
}

impl TripSource for GeoJsonSource {
    fn name(&self) -> &'static str {
        "geojson-files"
    }

    fn points(&self) -> Result<Vec<TripEvent>, TripMapError> {
        load_features(&self.points_path, EventKind::Stop)
    }

    fn routes(&self) -> Result<Vec<TripEvent>, TripMapError> {
        load_features(&self.routes_path, EventKind::Route)
    }
}

/// Load both datasets from `source` and merge them into a date-sorted table.
///
/// # Errors
/// Propagates the first dataset error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "tripmap::load", skip(source), fields(source = source.name()))
)]
pub fn load(source: &dyn TripSource) -> Result<TripTable, TripMapError> {
    let points = source.points()?;
    let routes = source.routes()?;
    #[cfg(feature = "tracing")]
    tracing::debug!(points = points.len(), routes = routes.len(), "trip datasets loaded");
    Ok(merge_trip_data(points, routes))
}
