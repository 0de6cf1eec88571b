//! Wardrobe Screen Component
//!
//! Count label plus the full grid, re-read from storage on every entry.

use leptos::prelude::*;
use wardrobe_core::{count_label, GalleryView, Screen};

use crate::components::{EmptyState, ScreenSection, WardrobeCard};
use crate::context::{use_app_context, use_config};
use crate::storage;
use crate::store::{store_collection, store_item_count, store_set_items, use_app_store};

#[component]
pub fn WardrobeScreen() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let collection = storage::load_wardrobe(&config);
        log::info!("[WARDROBE] Loaded {} items, trigger={}", collection.len(), trigger);
        store_set_items(&store, collection);
    });

    let gallery = move || GalleryView::from_collection(&store_collection(&store));

    view! {
        <ScreenSection screen=Screen::Wardrobe>
            <div class="wardrobe-header">
                <h2>"My Wardrobe"</h2>
                <span id="wardrobe-count" class="wardrobe-count">
                    {move || count_label(store_item_count(&store))}
                </span>
            </div>
            <div id="wardrobe-grid" class="wardrobe-grid">
                {move || match gallery() {
                    GalleryView::Empty => view! { <EmptyState /> }.into_any(),
                    GalleryView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <WardrobeCard card=card /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </ScreenSection>
    }
}
