//! Build state
//!
//! The user's in-progress selection: a mapping from slot name to exactly
//! one part. The slot key is the part's category, so adding a second part
//! of a category replaces the first. Every mutation persists before
//! returning. The build keeps its own copy of each part; later catalog
//! edits do not reach back into an existing build.

use crate::error::StorageError;
use crate::part::Part;
use crate::store::StateStore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Persisted record key. The value is a JSON object of slot name to part.
pub const BUILD_KEY: &str = "build/v1";

/// Slot-to-part mapping. BTreeMap keeps iteration deterministic for
/// rendering and serialization.
pub type Slots = BTreeMap<String, Part>;

/// Build state plus its persistence handle.
pub struct BuildState {
    slots: Slots,
    store: Arc<dyn StateStore>,
}

impl BuildState {
    /// Load the persisted build. Absent means an empty build; a corrupt
    /// record resets to empty (logged) and is re-persisted.
    pub fn open(store: Arc<dyn StateStore>) -> Result<Self, StorageError> {
        let slots = match store.get(BUILD_KEY)? {
            Some(raw) => match serde_json::from_slice::<Slots>(&raw) {
                Ok(slots) => slots,
                Err(e) => {
                    warn!(
                        "Persisted build record is corrupt ({}); resetting to empty build",
                        e
                    );
                    let slots = Slots::new();
                    persist(store.as_ref(), &slots)?;
                    slots
                }
            },
            None => Slots::new(),
        };

        Ok(Self { slots, store })
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add a part, deriving the slot from its category and overwriting any
    /// existing occupant. Returns the slot name.
    pub fn add_part(&mut self, part: Part) -> Result<String, StorageError> {
        let slot = part.slot().to_string();
        self.slots.insert(slot.clone(), part);
        persist(self.store.as_ref(), &self.slots)?;
        Ok(slot)
    }

    /// Remove a slot, returning its occupant. Removing an absent slot is a
    /// no-op and does not touch the persisted record.
    pub fn remove_part(&mut self, slot: &str) -> Result<Option<Part>, StorageError> {
        match self.slots.remove(slot) {
            Some(part) => {
                persist(self.store.as_ref(), &self.slots)?;
                Ok(Some(part))
            }
            None => Ok(None),
        }
    }

    /// Empty all slots.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.slots.clear();
        persist(self.store.as_ref(), &self.slots)
    }

    /// Sum of prices over occupied slots.
    pub fn total(&self) -> f64 {
        self.slots.values().map(|p| p.price).sum()
    }
}

fn persist(store: &dyn StateStore, slots: &Slots) -> Result<(), StorageError> {
    let raw = serde_json::to_vec(slots)
        .map_err(|e| StorageError::Backend(format!("Failed to serialize build: {}", e)))?;
    store.put(BUILD_KEY, &raw)
}
