//! Wardrobe Repository
//!
//! Loads and saves the whole collection as one JSON array in one slot.

use crate::config::STORAGE_KEY;
use crate::domain::WardrobeCollection;
use crate::error::{StoreError, StoreResult};

use super::KeyValueStore;

pub struct WardrobeRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WardrobeRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Load, distinguishing a malformed slot from an absent one
    pub fn try_load(&self) -> StoreResult<WardrobeCollection> {
        match self.store.get(&self.key)? {
            None => Ok(WardrobeCollection::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            }),
        }
    }

    /// Load for display, treating both absent and unreadable data as an
    /// empty wardrobe. Write paths use [`Self::try_load`] instead.
    pub fn load(&self) -> WardrobeCollection {
        match self.try_load() {
            Ok(collection) => {
                log::debug!("[STORE] Loaded {} items from {:?}", collection.len(), self.key);
                collection
            }
            Err(err) => {
                log::warn!("[STORE] {}, showing an empty wardrobe", err);
                WardrobeCollection::new()
            }
        }
    }

    /// Replace the stored collection
    pub fn save(&self, collection: &WardrobeCollection) -> StoreResult<()> {
        let raw = serde_json::to_string(collection)?;
        self.store.set(&self.key, &raw)?;
        log::debug!("[STORE] Saved {} items ({} bytes)", collection.len(), raw.len());
        Ok(())
    }
}
