//! Domain Layer
//!
//! Wardrobe entities and the fixed option sets the form offers.
//! This layer has NO external dependencies (except serde for serialization).

mod collection;
mod item;
mod options;
mod pending;
mod style_tags;

pub use collection::WardrobeCollection;
pub use item::WardrobeItem;
pub use options::{option_label, CATEGORIES, COLOR_SUGGESTIONS, SEASONS};
pub use pending::PendingUpload;
pub use style_tags::StyleTags;
