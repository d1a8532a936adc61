use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Value, json};
use tripmap_core::calendar::parse_timezone;
use tripmap_core::{
    CalendarEvent, CalendarOptions, DateRange, DateRangeResolver, DayOffsetPolicy,
    GeoJsonRenderer, GeoJsonSource, MapRenderer, MapStyle, TripMapConfig, TripMapError,
    TripSource, TripTable, calendar_events, load,
};

use crate::view::TripView;

/// Display shell that loads the trip once and answers each calendar refresh.
pub struct TripMap {
    pub(crate) table: TripTable,
    pub(crate) resolver: DateRangeResolver,
    pub(crate) renderer: Box<dyn MapRenderer + Send + Sync>,
    pub(crate) cfg: TripMapConfig,
    pub(crate) source_name: &'static str,
}

/// Builder for constructing a `TripMap` with custom configuration.
pub struct TripMapBuilder {
    source: Option<Arc<dyn TripSource>>,
    renderer: Option<Box<dyn MapRenderer + Send + Sync>>,
    cfg: TripMapConfig,
}

impl Default for TripMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TripMapBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Without an explicit source the trip is read from
    /// `data/points.json` and `data/routes.json` (see [`data_dir`](Self::data_dir)).
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            renderer: None,
            cfg: TripMapConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: TripMapConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Read the trip from `source` instead of the configured GeoJSON files.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TripSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use a custom map renderer. Defaults to [`GeoJsonRenderer`].
    #[must_use]
    pub fn renderer(mut self, renderer: Box<dyn MapRenderer + Send + Sync>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Set the page title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.cfg.title = title.into();
        self
    }

    /// Set the caption shown under the title.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.cfg.subtitle = subtitle.into();
        self
    }

    /// Directory holding `points.json` and `routes.json`.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.data_dir = dir.into();
        self
    }

    /// Map appearance.
    #[must_use]
    pub fn map_style(mut self, style: MapStyle) -> Self {
        self.cfg.map = style;
        self
    }

    /// Offsets applied to widget-reported dates.
    #[must_use]
    pub const fn day_offset(mut self, policy: DayOffsetPolicy) -> Self {
        self.cfg.day_offset = policy;
        self
    }

    /// IANA timezone that offset-bearing widget timestamps are converted into.
    #[must_use]
    pub fn timezone(mut self, name: impl Into<String>) -> Self {
        self.cfg.timezone = Some(name.into());
        self
    }

    /// Load the trip and build the `TripMap`.
    ///
    /// # Errors
    /// - `InvalidArg` for an unknown timezone name.
    /// - `Io` / `Data` when a dataset cannot be loaded.
    /// - `NoTripData` when both datasets are empty; nothing can be shown.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tripmap::build", skip(self)))]
    pub fn build(self) -> Result<TripMap, TripMapError> {
        let tz = self.cfg.timezone.as_deref().map(parse_timezone).transpose()?;
        let source: Arc<dyn TripSource> = match self.source {
            Some(source) => source,
            None => Arc::new(GeoJsonSource::from_config(&self.cfg)),
        };

        let table = load(source.as_ref())?;
        let resolver = DateRangeResolver::for_table(&table, self.cfg.day_offset)?.with_timezone(tz);

        #[cfg(feature = "tracing")]
        tracing::info!(
            source = source.name(),
            events = table.len(),
            span = %resolver.default_range(),
            "trip loaded"
        );

        Ok(TripMap {
            table,
            resolver,
            renderer: match self.renderer {
                Some(renderer) => renderer,
                None => Box::new(GeoJsonRenderer),
            },
            cfg: self.cfg,
            source_name: source.name(),
        })
    }
}

impl TripMap {
    /// Start building a new `TripMap`.
    ///
    /// ```rust,ignore
    /// let trip = tripmap::TripMap::builder()
    ///     .data_dir("data")
    ///     .timezone("Asia/Tokyo")
    ///     .build()?;
    /// let view = trip.refresh(&serde_json::json!({ "date_click": { "date": "2025-03-07" } }));
    /// ```
    #[must_use]
    pub fn builder() -> TripMapBuilder {
        TripMapBuilder::new()
    }

    /// Run one resolve, slice, and render cycle for the widget's current state.
    ///
    /// Never fails: unusable selections fall back to the full trip span.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "tripmap::refresh", skip_all))]
    #[must_use]
    pub fn refresh(&self, state: &Value) -> TripView<'_> {
        let resolved = self.resolver.resolve(state);
        let events = self.table.slice(&resolved.range);
        let map = self.renderer.render(events, &self.cfg.map);

        #[cfg(feature = "tracing")]
        tracing::debug!(range = %resolved.range, shown = events.len(), "refreshed");

        TripView {
            range: resolved.range,
            origin: resolved.origin,
            events,
            map,
        }
    }

    /// Page document for the display shell: title, calendar feed, and the current view.
    #[must_use]
    pub fn page(&self, state: &Value) -> Value {
        json!({
            "title": self.cfg.title,
            "subtitle": self.cfg.subtitle,
            "calendar": {
                "options": self.calendar_options(),
                "events": self.calendar_events(),
            },
            "view": self.refresh(state),
        })
    }

    /// Events shown for an explicit range.
    #[must_use]
    pub fn slice(&self, range: &DateRange) -> &[tripmap_core::TripEvent] {
        self.table.slice(range)
    }

    /// The loaded trip table.
    #[must_use]
    pub const fn table(&self) -> &TripTable {
        &self.table
    }

    /// Full trip span, shown when nothing is selected.
    #[must_use]
    pub const fn default_range(&self) -> DateRange {
        self.resolver.default_range()
    }

    /// Calendar feed for the widget.
    #[must_use]
    pub fn calendar_events(&self) -> Vec<CalendarEvent> {
        calendar_events(&self.table)
    }

    /// Calendar widget options.
    #[must_use]
    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions::for_table(&self.table)
    }

    /// Page title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.cfg.title
    }

    /// Caption shown under the title.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.cfg.subtitle
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &TripMapConfig {
        &self.cfg
    }

    /// Name of the source the trip was loaded from.
    #[must_use]
    pub const fn source_name(&self) -> &'static str {
        self.source_name
    }
}
