//! Home Screen Component

use leptos::prelude::*;
use wardrobe_core::Screen;

use crate::components::{LogPanel, ScreenSection};
use crate::context::use_app_context;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ScreenSection screen=Screen::Home>
            <div class="hero">
                <h1 class="hero-title">"Your closet, catalogued"</h1>
                <p class="hero-text">"Snap a photo, tag it, and keep every piece you own in one place."</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| ctx.go_to(Screen::Upload)>
                        "Add Item"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| ctx.go_to(Screen::Wardrobe)>
                        "View Wardrobe"
                    </button>
                </div>
            </div>
            <LogPanel />
        </ScreenSection>
    }
}
