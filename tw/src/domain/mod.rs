//! Domain types for tripweaver

mod itinerary;

pub use itinerary::{Itinerary, RawItinerary};
