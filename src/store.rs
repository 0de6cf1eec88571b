//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use wardrobe_core::{WardrobeCollection, WardrobeItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items as last loaded from storage
    pub items: Vec<WardrobeItem>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the loaded items wholesale
pub fn store_set_items(store: &AppStore, collection: WardrobeCollection) {
    *store.items().write() = collection.into_items();
}

/// Items currently in the store as a collection
pub fn store_collection(store: &AppStore) -> WardrobeCollection {
    WardrobeCollection::from(store.items().get())
}

/// Number of loaded items
pub fn store_item_count(store: &AppStore) -> usize {
    store.items().read().len()
}
