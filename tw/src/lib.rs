//! tripweaver - AI travel itinerary search with durable favorites
//!
//! tripweaver asks a generative-text API for structured travel itineraries,
//! parses the fenced JSON payload out of the model's freeform reply, caches
//! the latest successful result set, and keeps a durable, observable set of
//! favorited itineraries on disk.
//!
//! # Modules
//!
//! - [`domain`] - the itinerary record
//! - [`llm`] - generative client trait, Gemini implementation, response mapper
//! - [`trips`] - request service, result cache, and interactor
//! - [`favorites`] - durable favorites store with a watch-based snapshot stream
//! - [`state`] - UI-free screen state machines
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod favorites;
pub mod llm;
pub mod state;
pub mod trips;

// Re-export commonly used types
pub use config::{Config, LlmConfig, StorageConfig};
pub use domain::Itinerary;
pub use favorites::{FavoritesStore, StoreError};
pub use llm::{GeminiClient, GenerativeClient, LlmError};
pub use state::{DetailsState, HomeState, InputState, ItineraryCard, TripsState};
pub use trips::{DefaultTripsRepository, SearchCache, TripsInteractor, TripsRepository};
