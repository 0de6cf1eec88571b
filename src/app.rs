//! Wardrobe App
//!
//! Root component: navigation bar plus the three screens.

use console_logger::ConsoleLogger;
use leptos::prelude::*;
use reactive_stores::Store;
use wardrobe_core::{Screen, WardrobeConfig};

use crate::components::{HomeScreen, NavBar, UploadScreen, WardrobeScreen};
use crate::context::{AppContext, LogHistory};
use crate::store::AppState;

#[component]
pub fn App(config: WardrobeConfig, logger: Option<&'static ConsoleLogger>) -> impl IntoView {
    // Provide context to all children
    provide_context(config);
    provide_context(LogHistory(logger));
    provide_context(Store::new(AppState::new()));
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.go_to(Screen::Home);

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                <HomeScreen />
                <UploadScreen />
                <WardrobeScreen />
            </main>
        </div>
    }
}
