//! Itinerary domain model

use serde::{Deserialize, Serialize};

/// A generated travel itinerary
///
/// Immutable value object: favoriting or any other "change" wraps or copies
/// the record, never mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Itinerary {
    /// Unique identifier, assigned locally at parse time - never by the API
    pub id: String,
    /// Human-readable short name
    pub title: String,
    /// Classification label, e.g. "cultural" or "adventure"
    pub level: String,
    /// One entry per day, day 1 first; order is meaningful
    pub program: Vec<String>,
}

/// Decode shape for a single itinerary as the model emits it
///
/// Carries no id: an id echoed back by the model is ignored on decode
/// (unknown fields are skipped) and a fresh one is assigned by the mapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItinerary {
    pub title: String,
    pub level: String,
    pub program: Vec<String>,
}

impl RawItinerary {
    /// Finalize into a domain record under the given id
    pub fn with_id(self, id: String) -> Itinerary {
        Itinerary {
            id,
            title: self.title,
            level: self.level,
            program: self.program,
        }
    }
}
