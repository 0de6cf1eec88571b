//! Blocking user notifications

use wardrobe_core::WardrobeError;

pub fn alert(message: &str) {
    log::info!("[ALERT] {}", message);
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("[ALERT] Could not show alert: {:?}", err);
        }
    }
}

pub fn alert_error(err: &WardrobeError) {
    alert(&err.user_message());
}
