//! Sled-based implementation of the state store

use crate::error::StorageError;
use crate::store::StateStore;
use sled;
use std::path::Path;

/// Sled-backed state store
///
/// Holds the two application records (`catalog/v1`, `build/v1`) as JSON
/// values in a single sled tree. Writes are flushed immediately so the
/// persisted state never trails an observable action.
pub struct SledStateStore {
    db: sled::Db,
}

impl SledStateStore {
    /// Open (or create) a sled database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)
            .map_err(|e| StorageError::Backend(format!("Failed to open sled database: {}", e)))?;
        Ok(Self { db })
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }
}

impl StateStore for SledStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let value = self
            .db
            .get(key.as_bytes())
            .map_err(|e| StorageError::Backend(format!("Failed to read '{}': {}", key, e)))?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.db
            .insert(key.as_bytes(), value)
            .map_err(|e| StorageError::Backend(format!("Failed to write '{}': {}", key, e)))?;
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .remove(key.as_bytes())
            .map_err(|e| StorageError::Backend(format!("Failed to remove '{}': {}", key, e)))?;
        self.db
            .flush()
            .map_err(|e| StorageError::Backend(format!("Failed to flush database: {}", e)))?;
        Ok(())
    }
}
