//! Navigation Bar Component

use leptos::prelude::*;
use wardrobe_core::NavButton;

use crate::context::use_app_context;

/// Header with the Home and Wardrobe buttons
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let nav_class = move |button: NavButton| {
        if ctx.highlight.get() == Some(button) { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <header class="app-header">
            <span class="app-title">"My Wardrobe"</span>
            <nav class="app-nav">
                <button
                    id=NavButton::Home.dom_id()
                    class=move || nav_class(NavButton::Home)
                    on:click=move |_| ctx.go_to(NavButton::Home.target())
                >
                    "Home"
                </button>
                <button
                    id=NavButton::Wardrobe.dom_id()
                    class=move || nav_class(NavButton::Wardrobe)
                    on:click=move |_| ctx.go_to(NavButton::Wardrobe.target())
                >
                    "Wardrobe"
                </button>
            </nav>
        </header>
    }
}
