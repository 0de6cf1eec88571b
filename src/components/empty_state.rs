//! Empty State Component
//!
//! Placeholder for a wardrobe with no items.

use leptos::prelude::*;
use wardrobe_core::Screen;

use crate::context::use_app_context;

#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="empty-state">
            <div class="empty-icon">"👔"</div>
            <p class="empty-text">"Your wardrobe is empty"</p>
            <p class="empty-subtext">"Start by uploading your first clothing item"</p>
            <button class="btn btn-primary" on:click=move |_| ctx.go_to(Screen::Upload)>
                "Upload First Item"
            </button>
        </div>
    }
}
