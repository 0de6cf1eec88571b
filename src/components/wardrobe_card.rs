//! Wardrobe Card Component

use leptos::prelude::*;
use wardrobe_core::ItemCard;

/// One item in the grid: image, category and color badges, tag chips
#[component]
pub fn WardrobeCard(card: ItemCard) -> impl IntoView {
    let ItemCard { image, alt, category, color, tags, .. } = card;

    // No tag block at all for untagged items
    let tags_block = (!tags.is_empty()).then(|| {
        view! {
            <div class="item-tags">
                {tags.into_iter().map(|tag| view! { <span class="item-tag">{tag}</span> }).collect_view()}
            </div>
        }
    });

    view! {
        <div class="wardrobe-item">
            <div class="item-image-container">
                <img src=image alt=alt class="item-image" />
            </div>
            <div class="item-metadata">
                <div class="item-label">
                    <span class="item-badge category">{category}</span>
                    <span class="item-badge">{color}</span>
                </div>
                {tags_block}
            </div>
        </div>
    }
}
