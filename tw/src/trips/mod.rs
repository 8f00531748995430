//! Itinerary search: request service, result cache, and interactor

mod cache;
mod interactor;
mod repository;

pub use cache::SearchCache;
pub use interactor::TripsInteractor;
pub use repository::{DefaultTripsRepository, TripsRepository, build_prompt};
