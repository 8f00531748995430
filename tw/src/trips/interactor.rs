//! Trips interactor
//!
//! The single entry point state holders use for remote-fetch concerns.
//! Favorites are accessed directly against the FavoritesStore, not through
//! here - the interactor mediates search and cache reads only.

use std::sync::Arc;
use tracing::debug;

use super::TripsRepository;
use crate::domain::Itinerary;
use crate::llm::LlmError;

/// Stateless pass-through over a TripsRepository
#[derive(Clone)]
pub struct TripsInteractor {
    repository: Arc<dyn TripsRepository>,
}

impl TripsInteractor {
    pub fn new(repository: Arc<dyn TripsRepository>) -> Self {
        Self { repository }
    }

    /// Fetch itineraries for the given destination and duration
    pub async fn search(&self, destination: &str, duration_days: &str) -> Result<Vec<Itinerary>, LlmError> {
        debug!(%destination, %duration_days, "search: called");
        self.repository.search(destination, duration_days).await
    }

    /// The most recent successful result set, if any
    pub async fn cached(&self) -> Vec<Itinerary> {
        self.repository.cached().await
    }
}
