//! Single-slot cache for the most recent successful search

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::Itinerary;

/// Process-lifetime cache holding the latest successful result set
///
/// Explicitly owned and injectable rather than ambient global state, so it
/// can be substituted in tests. The slot is only ever replaced wholesale -
/// a new result set never merges with a prior one.
#[derive(Clone, Default)]
pub struct SearchCache {
    slot: Arc<RwLock<Vec<Itinerary>>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached result set atomically
    pub async fn replace(&self, results: Vec<Itinerary>) {
        debug!(count = results.len(), "SearchCache::replace: called");
        *self.slot.write().await = results;
    }

    /// Snapshot of the cached result set; empty if no search has succeeded
    pub async fn snapshot(&self) -> Vec<Itinerary> {
        self.slot.read().await.clone()
    }
}
