//! Browser Storage
//!
//! `localStorage` adapter for the wardrobe repository.

use wardrobe_core::error::StoreResult;
use wardrobe_core::{
    form, ItemDraft, KeyValueStore, PendingUpload, StoreError, WardrobeCollection, WardrobeConfig, WardrobeError,
    WardrobeItem, WardrobeRepository,
};
use wasm_bindgen::JsValue;

/// The window's `localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(|e| StoreError::Read(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|e| StoreError::Write(js_error(e)))
    }
}

pub fn open_repository(config: &WardrobeConfig) -> StoreResult<WardrobeRepository<LocalStore>> {
    Ok(WardrobeRepository::with_key(LocalStore::open()?, config.storage_key.clone()))
}

/// Current collection, empty when storage is missing or unreadable
pub fn load_wardrobe(config: &WardrobeConfig) -> WardrobeCollection {
    match open_repository(config) {
        Ok(repo) => repo.load(),
        Err(err) => {
            log::warn!("[STORE] {}", err);
            WardrobeCollection::new()
        }
    }
}

/// Save a new item built from the form and the pending image
pub fn add_item(
    config: &WardrobeConfig,
    draft: ItemDraft,
    pending: Option<PendingUpload>,
) -> Result<WardrobeItem, WardrobeError> {
    let repo = open_repository(config)?;
    form::submit(&repo, draft, pending, chrono::Utc::now().timestamp_millis())
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
