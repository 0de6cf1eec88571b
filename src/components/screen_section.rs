//! Screen Section Component
//!
//! Container for one top-level screen, active only while it is current.

use leptos::prelude::*;
use wardrobe_core::Screen;

use crate::context::use_app_context;

#[component]
pub fn ScreenSection(screen: Screen, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section
            id=screen.dom_id()
            class=move || if ctx.screen.get() == screen { "screen active" } else { "screen" }
        >
            {children()}
        </section>
    }
}
