//! Persistence: durable save/load and user-initiated export/import.
//!
//! Save and load go through a `SnapshotStore`; export produces the same
//! document as a downloadable byte stream, and import runs the full
//! migration so old or lightly malformed snapshots still load. Storage
//! failures never kill a session: the game continues in-memory-only and
//! the failure is logged the first time it happens rather than silently
//! swallowed.

pub mod snapshot;
pub mod store;

pub use snapshot::ValidationError;
pub use store::{FileStore, MemoryStore, SnapshotStore, StorageError};

use tracing::{debug, warn};

use crate::core::GameState;

/// Saves, loads, exports, and imports game snapshots.
pub struct PersistenceManager<S: SnapshotStore> {
    store: S,
    warned: bool,
}

impl<S: SnapshotStore> PersistenceManager<S> {
    /// Create a manager over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            warned: false,
        }
    }

    /// Durably store the state.
    ///
    /// Failures are returned so the caller can notify the user, but the
    /// session is unaffected either way.
    pub fn save(&mut self, state: &GameState) -> Result<(), StorageError> {
        let text = snapshot::to_json(state).map_err(|e| StorageError::Io(e.into()))?;
        match self.store.write(&text) {
            Ok(()) => {
                debug!(bytes = text.len(), "snapshot saved");
                Ok(())
            }
            Err(e) => {
                self.warn_once(&format!("saving snapshot failed: {e}"));
                Err(e)
            }
        }
    }

    /// Load the most recent snapshot.
    ///
    /// Returns `None` when nothing is stored or the stored document
    /// cannot be migrated; the caller falls back to the default initial
    /// state.
    pub fn load(&mut self) -> Option<GameState> {
        let text = match self.store.read() {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                self.warn_once(&format!("reading snapshot failed: {e}"));
                return None;
            }
        };

        match snapshot::from_json(&text) {
            Ok(state) => Some(state),
            Err(e) => {
                self.warn_once(&format!("stored snapshot is unusable: {e}"));
                None
            }
        }
    }

    /// Serialize the state for a user-initiated download.
    pub fn export(&self, state: &GameState) -> Vec<u8> {
        // Pretty output: the file is meant to be seen (and hand-edited).
        snapshot::to_json_pretty(state)
            .map(String::into_bytes)
            .unwrap_or_default()
    }

    /// Parse, validate, and migrate an uploaded snapshot.
    ///
    /// Rejection leaves the current session untouched.
    pub fn import(&self, bytes: &[u8]) -> Result<GameState, ValidationError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ValidationError::NotAnObject)?;
        snapshot::from_json(text)
    }

    fn warn_once(&mut self, message: &str) {
        if !self.warned {
            warn!("{message} (continuing in-memory only)");
            self.warned = true;
        } else {
            debug!("{message}");
        }
    }
}
