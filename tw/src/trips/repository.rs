//! Itinerary request service
//!
//! Builds the generation prompt, sends it through a GenerativeClient, maps
//! the completion into domain records, and keeps the latest successful
//! result set in an injected cache slot.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::SearchCache;
use crate::domain::Itinerary;
use crate::llm::{GenerativeClient, LlmError, mapper};

/// How many itineraries the prompt asks for
///
/// Advisory only: the response side stays permissive and returns whatever
/// parsed, logging when the count differs.
const REQUESTED_COUNT: usize = 3;

/// Contract for fetching and caching travel itineraries
#[async_trait]
pub trait TripsRepository: Send + Sync {
    /// Fetch itineraries for a destination and a duration in days
    ///
    /// Soft-empty: a reachable service with no usable body yields an empty
    /// list, not an error. Parse failures propagate uncaught.
    async fn search(&self, destination: &str, duration_days: &str) -> Result<Vec<Itinerary>, LlmError>;

    /// The most recent successful result set; empty if none. No network.
    async fn cached(&self) -> Vec<Itinerary>;
}

/// Build the single natural-language instruction sent to the model
pub fn build_prompt(destination: &str, duration_days: &str) -> String {
    format!(
        "Return a valid JSON array containing exactly {REQUESTED_COUNT} travel itineraries \
         for {duration_days} days in {destination} with top attractions of the destination.\n\
         Each itinerary object must include:\n\
         - title (string)\n\
         - level (string): type of vacation (e.g., cultural, adventure, relaxing)\n\
         - program (array of strings), where each string is the structured, \
         but detailed plan for one day\n\
         Return only the JSON, with no explanations or extra text.\n"
    )
}

/// Default repository over a generative client and an injected cache slot
pub struct DefaultTripsRepository {
    client: Arc<dyn GenerativeClient>,
    cache: SearchCache,
}

impl DefaultTripsRepository {
    pub fn new(client: Arc<dyn GenerativeClient>, cache: SearchCache) -> Self {
        Self { client, cache }
    }
}

#[async_trait]
impl TripsRepository for DefaultTripsRepository {
    async fn search(&self, destination: &str, duration_days: &str) -> Result<Vec<Itinerary>, LlmError> {
        debug!(%destination, %duration_days, "search: called");
        let prompt = build_prompt(destination, duration_days);

        let Some(text) = self.client.generate(&prompt).await? else {
            debug!("search: no usable body, returning empty");
            return Ok(Vec::new());
        };

        let itineraries = mapper::map_response(&text)?;
        if itineraries.len() != REQUESTED_COUNT {
            warn!(
                count = itineraries.len(),
                requested = REQUESTED_COUNT,
                "search: model returned unexpected itinerary count"
            );
        }

        self.cache.replace(itineraries.clone()).await;
        debug!(count = itineraries.len(), "search: cached and returning results");
        Ok(itineraries)
    }

    async fn cached(&self) -> Vec<Itinerary> {
        self.cache.snapshot().await
    }
}
