//! Configuration types shared by the store, renderer, and display shell.

use std::path::PathBuf;

use crate::range::DayOffsetPolicy;
use serde::{Deserialize, Serialize};

/// Appearance of the rendered map layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStyle {
    /// Tile set name understood by the map widget.
    pub tiles: String,
    /// Map width in pixels.
    pub width: u32,
    /// Map height in pixels.
    pub height: u32,
    /// Font size of the location marker icon, in pixels.
    pub marker_size_px: u32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            tiles: "CartoDB positron".to_string(),
            width: 1400,
            height: 700,
            marker_size_px: 30,
        }
    }
}

/// Global configuration for the `TripMap` display shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripMapConfig {
    /// Page title.
    pub title: String,
    /// Caption shown under the title.
    pub subtitle: String,
    /// Directory holding the trip data files.
    pub data_dir: PathBuf,
    /// File name of the stops (points) dataset inside `data_dir`.
    pub points_file: String,
    /// File name of the routes dataset inside `data_dir`.
    pub routes_file: String,
    /// Map layer appearance.
    pub map: MapStyle,
    /// Offsets applied to widget-reported dates.
    pub day_offset: DayOffsetPolicy,
    /// Optional IANA timezone; offset-bearing widget timestamps are converted
    /// into it before being truncated to a date.
    pub timezone: Option<String>,
}

impl Default for TripMapConfig {
    fn default() -> Self {
        Self {
            title: "Viaggio in Giappone".to_string(),
            subtitle: "Tappe giorno per giorno".to_string(),
            data_dir: PathBuf::from("data"),
            points_file: "points.json".to_string(),
            routes_file: "routes.json".to_string(),
            map: MapStyle::default(),
            day_offset: DayOffsetPolicy::default(),
            timezone: None,
        }
    }
}

impl TripMapConfig {
    /// Full path of the stops dataset.
    #[must_use]
    pub fn points_path(&self) -> PathBuf {
        self.data_dir.join(&self.points_file)
    }

    /// Full path of the routes dataset.
    #[must_use]
    pub fn routes_path(&self) -> PathBuf {
        self.data_dir.join(&self.routes_file)
    }
}
