//! State store abstraction
//!
//! The catalog and build facades persist through this trait so the core
//! stays testable without a real database. `SledStateStore` is the
//! production backend; `MemoryStateStore` backs unit tests.

pub mod persistence;

pub use persistence::SledStateStore;

use crate::error::StorageError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Keyed byte store. Values are JSON documents; the trait does not care.
pub trait StateStore: Send + Sync {
    /// Fetch the raw value for a key, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write the value for a key, overwriting any existing value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
