//! Configuration
//!
//! Fixed names shared with the page markup and persisted data, plus the
//! small runtime config the app hands around via context.

use log::LevelFilter;

/// Storage slot holding the whole serialized collection
pub const STORAGE_KEY: &str = "wardrobe";

/// Accepted MIME type prefix for uploads
pub const IMAGE_MIME_PREFIX: &str = "image/";

pub const ALERT_NOT_AN_IMAGE: &str = "Please upload an image file";
pub const ALERT_ITEM_ADDED: &str = "Item added to your wardrobe!";
pub const ALERT_MISSING_IMAGE: &str = "Please choose a photo before saving";
pub const ALERT_UNREADABLE: &str = "That image could not be read, please try another file";
pub const ALERT_CORRUPT_WARDROBE: &str = "Your saved wardrobe could not be read, so the new item was not saved";

/// Default number of log lines kept in memory
pub const DEFAULT_LOG_HISTORY: usize = 200;

/// Runtime configuration for the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeConfig {
    /// Storage slot the collection lives in
    pub storage_key: String,
    /// Maximum level forwarded to the console
    pub log_level: LevelFilter,
    /// How many formatted log lines to keep
    pub log_history: usize,
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        let log_level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level,
            log_history: DEFAULT_LOG_HISTORY,
        }
    }
}
