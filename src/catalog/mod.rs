//! Catalog store
//!
//! Owns the list of available parts and its persisted record. Loaded from
//! the state store on open; an absent or corrupt record resets to the
//! sample seed (an explicit, logged transition, never a user-facing
//! error). Every mutation persists before returning, so in-memory and
//! persisted state never diverge across an observable action.

pub mod seed;
pub mod view;

use crate::error::{ApiError, StorageError};
use crate::part::Part;
use crate::store::StateStore;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Persisted record key. The value is a JSON array of parts.
pub const CATALOG_KEY: &str = "catalog/v1";

/// Catalog of available parts plus its persistence handle.
pub struct CatalogStore {
    parts: Vec<Part>,
    store: Arc<dyn StateStore>,
}

impl CatalogStore {
    /// Load the persisted catalog, seeding the sample set when the record
    /// is absent or fails to parse. The seed path re-persists immediately.
    pub fn open(store: Arc<dyn StateStore>) -> Result<Self, StorageError> {
        Self::open_with_seed(store, true)
    }

    /// Like `open`, but `seed_on_empty = false` starts an absent catalog
    /// empty instead of seeding. A corrupt record still resets to the
    /// seed either way.
    pub fn open_with_seed(
        store: Arc<dyn StateStore>,
        seed_on_empty: bool,
    ) -> Result<Self, StorageError> {
        let parts = match store.get(CATALOG_KEY)? {
            Some(raw) => match serde_json::from_slice::<Vec<Part>>(&raw) {
                Ok(parts) => parts,
                Err(e) => {
                    warn!(
                        "Persisted catalog record is corrupt ({}); resetting to sample seed",
                        e
                    );
                    let parts = seed::sample_parts();
                    persist(store.as_ref(), &parts)?;
                    parts
                }
            },
            None if seed_on_empty => {
                info!("No persisted catalog; seeding sample part set");
                let parts = seed::sample_parts();
                persist(store.as_ref(), &parts)?;
                parts
            }
            None => Vec::new(),
        };

        Ok(Self { parts, store })
    }

    /// All parts in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Look up a part by id. A miss is not an error.
    pub fn get(&self, id: u32) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Distinct categories, sorted, for filter pickers.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .parts
            .iter()
            .map(|p| p.category.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        cats.sort();
        cats
    }

    /// Wholesale replacement, used by import. Rejects duplicate ids so the
    /// catalog uniqueness invariant holds; on rejection the current catalog
    /// is untouched.
    pub fn replace(&mut self, parts: Vec<Part>) -> Result<(), ApiError> {
        let mut seen = HashSet::new();
        for part in &parts {
            if !seen.insert(part.id) {
                return Err(ApiError::ImportError(format!(
                    "duplicate part id {}",
                    part.id
                )));
            }
        }

        persist(self.store.as_ref(), &parts)?;
        self.parts = parts;
        Ok(())
    }

    /// Empty the catalog. Restoring the sample set is `seed()`.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.parts.clear();
        persist(self.store.as_ref(), &self.parts)
    }

    /// Restore the built-in sample set.
    pub fn seed(&mut self) -> Result<(), StorageError> {
        self.parts = seed::sample_parts();
        persist(self.store.as_ref(), &self.parts)
    }
}

fn persist(store: &dyn StateStore, parts: &[Part]) -> Result<(), StorageError> {
    let raw = serde_json::to_vec(parts)
        .map_err(|e| StorageError::Backend(format!("Failed to serialize catalog: {}", e)))?;
    store.put(CATALOG_KEY, &raw)
}
