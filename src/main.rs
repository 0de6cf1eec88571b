//! Wardrobe Frontend Entry Point

mod app;
mod components;
mod context;
mod notify;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use wardrobe_core::WardrobeConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = WardrobeConfig::default();
    let logger = match console_logger::init(config.log_level, config.log_history) {
        Ok(logger) => Some(logger),
        Err(err) => {
            web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
            None
        }
    };
    log::info!("[APP] Starting, storage key {:?}", config.storage_key);

    mount_to_body(move || view! { <App config=config logger=logger /> });
}
