//! UI-free presentation state holders
//!
//! These hold the screen state machines the original app drives from its
//! view layer: search input validation, the search lifecycle, and the
//! per-item favorite flag derived from the favorites snapshot. No rendering
//! lives here; callers subscribe and draw.

mod details;
mod home;

use crate::domain::Itinerary;

pub use details::DetailsState;
pub use home::{HomeState, InputState, TripsState};

/// Display-ready itinerary with its derived favorite flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryCard {
    pub id: String,
    pub title: String,
    /// Hashtagged classification label, e.g. "#cultural"
    pub level: String,
    pub program: Vec<String>,
    pub is_favorite: bool,
}

impl ItineraryCard {
    /// Build a card from a domain record, hashtagging the level for display
    pub fn from_record(record: &Itinerary, is_favorite: bool) -> Self {
        let level = if record.level.starts_with('#') {
            record.level.clone()
        } else {
            format!("#{}", record.level)
        };
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            level,
            program: record.program.clone(),
            is_favorite,
        }
    }

    /// Back to the domain record handed to the favorites store
    ///
    /// The store persists complete records, so the full card converts, not
    /// just its id. The display hashtag stays on the level: it round-trips
    /// unchanged, and `from_record` never double-prefixes.
    pub fn to_record(&self) -> Itinerary {
        Itinerary {
            id: self.id.clone(),
            title: self.title.clone(),
            level: self.level.clone(),
            program: self.program.clone(),
        }
    }
}
