//! Details screen state machine
//!
//! Resolves a single itinerary by id - from the cached search results
//! first, then from the favorites set - and mirrors the home screen's
//! toggle flow for that one record.

use tracing::debug;

use super::ItineraryCard;
use crate::domain::Itinerary;
use crate::favorites::{FavoritesStore, StoreError};
use crate::trips::TripsInteractor;

/// State holder for one itinerary's details
#[derive(Debug, Clone, Default)]
pub struct DetailsState {
    pub card: Option<ItineraryCard>,
    record: Option<Itinerary>,
    favorite_records: Vec<Itinerary>,
}

impl DetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the record for `id` and take its favorite status from the snapshot
    ///
    /// Cached search results win over the favorites copy; a favorites-only
    /// record still resolves, so a favorited itinerary stays reachable after
    /// the search results that produced it are gone.
    pub async fn load(&mut self, id: &str, interactor: &TripsInteractor, snapshot: Vec<Itinerary>) {
        debug!(%id, "load: called");
        let from_favorites = snapshot.iter().find(|record| record.id == id).cloned();
        let record = interactor
            .cached()
            .await
            .into_iter()
            .find(|record| record.id == id)
            .or_else(|| from_favorites.clone());

        self.favorite_records = snapshot;
        if let Some(record) = record {
            debug!(id = %record.id, "load: resolved");
            self.card = Some(ItineraryCard::from_record(&record, from_favorites.is_some()));
            self.record = Some(record);
        } else {
            debug!(%id, "load: not found in cache or favorites");
        }
    }

    /// Absorb a favorites snapshot and re-derive the flag
    pub fn apply_favorites(&mut self, snapshot: Vec<Itinerary>) {
        self.favorite_records = snapshot;
        if let Some(card) = &mut self.card {
            card.is_favorite = self.favorite_records.iter().any(|r| r.id == card.id);
        }
    }

    /// Toggle the loaded itinerary's favorite status
    ///
    /// Does nothing when no record resolved.
    pub async fn toggle_favorite(&mut self, store: &FavoritesStore) -> Result<(), StoreError> {
        let Some(record) = &self.record else {
            debug!("toggle_favorite: nothing loaded");
            return Ok(());
        };

        if self.favorite_records.iter().any(|r| r.id == record.id) {
            debug!(id = %record.id, "toggle_favorite: removing");
            store.remove(&record.id).await?;
        } else {
            debug!(id = %record.id, "toggle_favorite: adding");
            store.add(record.clone()).await?;
        }
        Ok(())
    }
}
