use tripmap_core::{TripEvent, TripMapError, TripSource};

mod fixtures;

/// How a [`MockSource`] answers dataset requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockBehavior {
    /// Serve the reference itinerary (2025-03-03 to 2025-03-28).
    #[default]
    Itinerary,
    /// Serve two empty datasets.
    Empty,
    /// Fail when the stops dataset is requested.
    FailPoints,
    /// Fail when the routes dataset is requested.
    FailRoutes,
}

/// Mock trip source for CI-safe demos. Provides deterministic data from static fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource {
    behavior: MockBehavior,
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_behavior(MockBehavior::Itinerary)
    }

    #[must_use]
    pub const fn with_behavior(behavior: MockBehavior) -> Self {
        Self { behavior }
    }

    fn forced_failure(dataset: &str) -> TripMapError {
        TripMapError::Io {
            path: format!("mock://{dataset}.json"),
            msg: "forced failure".to_string(),
        }
    }
}

impl TripSource for MockSource {
    fn name(&self) -> &'static str {
        "tripmap-mock"
    }

    fn points(&self) -> Result<Vec<TripEvent>, TripMapError> {
        match self.behavior {
            MockBehavior::Itinerary | MockBehavior::FailRoutes => Ok(fixtures::points::itinerary()),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::FailPoints => Err(Self::forced_failure("points")),
        }
    }

    fn routes(&self) -> Result<Vec<TripEvent>, TripMapError> {
        match self.behavior {
            MockBehavior::Itinerary | MockBehavior::FailPoints => Ok(fixtures::routes::itinerary()),
            MockBehavior::Empty => Ok(Vec::new()),
            MockBehavior::FailRoutes => Err(Self::forced_failure("routes")),
        }
    }
}
