//! Favorites store
//!
//! Persists favorited itineraries as a single JSON file holding one
//! serialized blob per record, and publishes the full current set through a
//! watch channel on every change. New subscribers always see at least the
//! latest snapshot.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info};

use crate::domain::Itinerary;

/// File name of the durable favorites key under the data directory
const FAVORITES_FILE: &str = "favorites.json";

/// Errors raised by the favorites store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable on-disk layout: a set of independently serialized record blobs
///
/// Each blob is a complete Itinerary as a JSON string, id included. No
/// schema version is written; a breaking field change needs a migration.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FavoritesFile {
    favorites: Vec<String>,
}

/// Durable, process-restart-surviving set of favorite itineraries
///
/// Writers run one read-modify-write cycle at a time: the set mutex is held
/// across load, mutate, persist, and emit, so concurrent add/remove calls
/// cannot interleave and corrupt the set.
pub struct FavoritesStore {
    path: PathBuf,
    set: Mutex<Vec<Itinerary>>,
    tx: watch::Sender<Vec<Itinerary>>,
}

impl FavoritesStore {
    /// Open the store backed by `dir/favorites.json`, loading any existing set
    ///
    /// A missing file is an empty set, not an error.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = dir.as_ref().join(FAVORITES_FILE);
        debug!(?path, "open: called");

        let set = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let file: FavoritesFile = serde_json::from_str(&content)?;
            let records = file
                .favorites
                .iter()
                .map(|blob| serde_json::from_str(blob))
                .collect::<Result<Vec<Itinerary>, _>>()?;
            info!(count = records.len(), "open: loaded favorites");
            records
        } else {
            debug!("open: no favorites file, starting empty");
            Vec::new()
        };

        let (tx, _) = watch::channel(set.clone());
        Ok(Self {
            path,
            set: Mutex::new(set),
            tx,
        })
    }

    /// Subscribe to the favorites set
    ///
    /// Emits the full current set on every change. The receiver holds the
    /// latest snapshot immediately; every emission is the authoritative
    /// complete set, never a delta.
    pub fn observe(&self) -> watch::Receiver<Vec<Itinerary>> {
        debug!("observe: new subscriber");
        self.tx.subscribe()
    }

    /// Add a record to the persisted set
    ///
    /// De-duplicates by id: re-adding an id replaces the stored blob, so a
    /// record whose non-id fields drifted can never leave two blobs for one
    /// id on disk.
    pub async fn add(&self, record: Itinerary) -> Result<(), StoreError> {
        debug!(id = %record.id, "add: called");
        let mut set = self.set.lock().await;
        set.retain(|stored| stored.id != record.id);
        set.push(record);
        self.persist_and_emit(&set).await
    }

    /// Remove any stored record with the given id
    ///
    /// Removing an id that is not present is a no-op, not an error.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        debug!(%id, "remove: called");
        let mut set = self.set.lock().await;
        set.retain(|stored| stored.id != id);
        self.persist_and_emit(&set).await
    }

    /// Write the whole set to disk, then publish the snapshot
    ///
    /// Called with the set mutex held. Writes to a temp file and renames so
    /// a crash mid-write never leaves a truncated favorites file.
    async fn persist_and_emit(&self, set: &[Itinerary]) -> Result<(), StoreError> {
        let blobs = set
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<String>, _>>()?;
        let content = serde_json::to_string_pretty(&FavoritesFile { favorites: blobs })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(count = set.len(), "persist_and_emit: persisted and emitting");
        let _ = self.tx.send(set.to_vec());
        Ok(())
    }
}
