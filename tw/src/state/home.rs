//! Home screen state machine
//!
//! Owns the destination/duration inputs, the search lifecycle, the current
//! suggestions, and the favorites list. The caller collects favorites
//! snapshots from the store and feeds them through `apply_favorites`.

use tracing::debug;

use super::ItineraryCard;
use crate::domain::Itinerary;
use crate::favorites::{FavoritesStore, StoreError};
use crate::trips::TripsInteractor;

/// Search result area of the home screen
///
/// Exhaustively matched everywhere it is consumed; adding a variant is a
/// compile-time prompt to handle it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TripsState {
    #[default]
    Empty,
    Loading,
    Error,
    Suggestions(Vec<ItineraryCard>),
}

/// One text input and its validation flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub value: String,
    pub is_error: bool,
}

/// State holder for the home screen
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub destination: InputState,
    pub duration: InputState,
    pub trips: TripsState,
    pub favorites: Vec<ItineraryCard>,
    /// Latest favorites snapshot, kept for per-card flag derivation
    favorite_records: Vec<Itinerary>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the destination input; any text is accepted here
    pub fn set_destination(&mut self, value: &str) {
        self.destination.value = value.to_string();
    }

    /// Update the duration input
    ///
    /// Rejected at the keystroke, not at submit: a non-empty edit containing
    /// anything but decimal digits leaves the state unchanged.
    pub fn set_duration(&mut self, value: &str) {
        if !value.is_empty() && !value.chars().all(|c| c.is_ascii_digit()) {
            debug!(%value, "set_duration: rejecting non-numeric edit");
            return;
        }
        self.duration.value = value.to_string();
    }

    /// Flag blank inputs; returns true when both are usable
    pub fn validate(&mut self) -> bool {
        self.destination.is_error = self.destination.value.trim().is_empty();
        self.duration.is_error = self.duration.value.trim().is_empty();
        !(self.destination.is_error || self.duration.is_error)
    }

    /// Dismiss the error indicator, discarding the failed query's results
    pub fn dismiss_error(&mut self) {
        self.trips = TripsState::Empty;
    }

    /// Run a search and settle into Suggestions or Error
    ///
    /// This is the one place a failed search is caught: the state machine
    /// converts it into the Error variant instead of surfacing it. Invalid
    /// inputs skip the fetch entirely.
    pub async fn search(&mut self, interactor: &TripsInteractor) {
        if !self.validate() {
            debug!("search: inputs invalid, not fetching");
            return;
        }

        self.trips = TripsState::Loading;
        match interactor.search(&self.destination.value, &self.duration.value).await {
            Ok(results) => {
                debug!(count = results.len(), "search: got suggestions");
                let cards = results
                    .iter()
                    .map(|record| ItineraryCard::from_record(record, self.is_favorited(&record.id)))
                    .collect();
                self.trips = TripsState::Suggestions(cards);
            }
            Err(e) => {
                debug!(error = %e, "search: failed");
                self.trips = TripsState::Error;
            }
        }
    }

    /// Absorb a favorites snapshot and re-derive every favorite flag
    ///
    /// Every emission from the store is the authoritative complete set, so
    /// both the favorites list and the per-suggestion flags are rebuilt from
    /// it wholesale.
    pub fn apply_favorites(&mut self, snapshot: Vec<Itinerary>) {
        debug!(count = snapshot.len(), "apply_favorites: called");
        self.favorite_records = snapshot;
        self.favorites = self
            .favorite_records
            .iter()
            .map(|record| ItineraryCard::from_record(record, true))
            .collect();

        if let TripsState::Suggestions(cards) = &mut self.trips {
            for card in cards.iter_mut() {
                card.is_favorite = self.favorite_records.iter().any(|r| r.id == card.id);
            }
        }
    }

    /// Toggle the favorite status of a displayed card
    ///
    /// Currently favorited: remove by id. Otherwise: add the full record -
    /// the store persists complete records, not bare ids. The store's
    /// emission loops back through `apply_favorites` to settle the flags.
    pub async fn toggle_favorite(&mut self, store: &FavoritesStore, card: &ItineraryCard) -> Result<(), StoreError> {
        if self.is_favorited(&card.id) {
            debug!(id = %card.id, "toggle_favorite: removing");
            store.remove(&card.id).await?;
        } else {
            debug!(id = %card.id, "toggle_favorite: adding");
            store.add(card.to_record()).await?;
        }
        Ok(())
    }

    fn is_favorited(&self, id: &str) -> bool {
        self.favorite_records.iter().any(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockGenerativeClient;
    use crate::trips::{DefaultTripsRepository, SearchCache};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn interactor(responses: Vec<Option<String>>) -> TripsInteractor {
        let client = Arc::new(MockGenerativeClient::new(responses));
        TripsInteractor::new(Arc::new(DefaultTripsRepository::new(client, SearchCache::new())))
    }

    fn record(id: &str) -> Itinerary {
        Itinerary {
            id: id.to_string(),
            title: "T".to_string(),
            level: "cultural".to_string(),
            program: vec!["Day 1".to_string()],
        }
    }

    #[test]
    fn test_duration_gate_rejects_non_numeric_edits() {
        let mut state = HomeState::new();

        state.set_duration("12");
        assert_eq!(state.duration.value, "12");

        // Rejected: state unchanged
        state.set_duration("12a");
        assert_eq!(state.duration.value, "12");

        // Clearing the field is allowed
        state.set_duration("");
        assert_eq!(state.duration.value, "");
    }

    #[test]
    fn test_validate_flags_blank_inputs() {
        let mut state = HomeState::new();
        assert!(!state.validate());
        assert!(state.destination.is_error);
        assert!(state.duration.is_error);

        state.set_destination("Lisbon");
        state.set_duration("3");
        assert!(state.validate());
        assert!(!state.destination.is_error);
        assert!(!state.duration.is_error);
    }

    #[tokio::test]
    async fn test_search_with_invalid_inputs_does_not_fetch() {
        let mut state = HomeState::new();
        let interactor = interactor(vec![]);

        state.search(&interactor).await;
        assert_eq!(state.trips, TripsState::Empty);
    }

    #[tokio::test]
    async fn test_search_success_yields_suggestions() {
        let body = r#"[{"title": "T", "level": "cultural", "program": ["Day 1"]}]"#;
        let interactor = interactor(vec![Some(body.to_string())]);

        let mut state = HomeState::new();
        state.set_destination("Lisbon");
        state.set_duration("3");
        state.search(&interactor).await;

        match &state.trips {
            TripsState::Suggestions(cards) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].level, "#cultural");
                assert!(!cards[0].is_favorite);
            }
            other => panic!("expected Suggestions, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_failure_settles_into_error_then_dismisses_to_empty() {
        let interactor = interactor(vec![Some("not json".to_string())]);

        let mut state = HomeState::new();
        state.set_destination("Lisbon");
        state.set_duration("3");
        state.search(&interactor).await;
        assert_eq!(state.trips, TripsState::Error);

        state.dismiss_error();
        assert_eq!(state.trips, TripsState::Empty);
    }

    #[tokio::test]
    async fn test_apply_favorites_flags_matching_suggestions() {
        let body = r#"[{"title": "T", "level": "cultural", "program": ["Day 1"]}]"#;
        let interactor = interactor(vec![Some(body.to_string())]);

        let mut state = HomeState::new();
        state.set_destination("Lisbon");
        state.set_duration("3");
        state.search(&interactor).await;

        let shown_id = match &state.trips {
            TripsState::Suggestions(cards) => cards[0].id.clone(),
            other => panic!("expected Suggestions, got {:?}", other),
        };

        state.apply_favorites(vec![record(&shown_id), record("unrelated")]);
        assert_eq!(state.favorites.len(), 2);
        assert!(state.favorites.iter().all(|card| card.is_favorite));

        match &state.trips {
            TripsState::Suggestions(cards) => assert!(cards[0].is_favorite),
            other => panic!("expected Suggestions, got {:?}", other),
        }

        // An empty snapshot clears every flag
        state.apply_favorites(vec![]);
        match &state.trips {
            TripsState::Suggestions(cards) => assert!(!cards[0].is_favorite),
            other => panic!("expected Suggestions, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_toggle_favorite_adds_then_removes() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::open(dir.path()).unwrap();
        let rx = store.observe();

        let mut state = HomeState::new();
        let card = ItineraryCard::from_record(&record("id-1"), false);

        state.toggle_favorite(&store, &card).await.unwrap();
        state.apply_favorites(rx.borrow().clone());
        assert_eq!(state.favorites.len(), 1);

        // Now favorited, so the second toggle removes
        state.toggle_favorite(&store, &card).await.unwrap();
        state.apply_favorites(rx.borrow().clone());
        assert!(state.favorites.is_empty());
    }
}
