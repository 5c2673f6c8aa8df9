//! Backing stores for the durable snapshot.
//!
//! The store is a trait seam so the engine does not care whether the
//! snapshot lives in a file, in memory, or somewhere a browser shim
//! provides. Storage failures are never fatal - the session continues
//! in-memory-only.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A storage read or write failure. Non-fatal by design.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying io failure (missing directory, quota, permissions).
    #[error("snapshot storage failed: {0}")]
    Io(#[from] io::Error),
}

/// Durable slot holding at most one snapshot document.
pub trait SnapshotStore {
    /// Read the stored snapshot, `None` if none has been written.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored snapshot.
    fn write(&mut self, snapshot: &str) -> Result<(), StorageError>;
}

/// File-backed store.
///
/// The parent directory is created on first write.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, snapshot: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, snapshot)?;
        Ok(())
    }
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, snapshot: &str) -> Result<(), StorageError> {
        self.slot = Some(snapshot.to_owned());
        Ok(())
    }
}
