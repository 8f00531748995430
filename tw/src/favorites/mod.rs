//! Durable, observable favorites set

mod store;

pub use store::{FavoritesStore, StoreError};
