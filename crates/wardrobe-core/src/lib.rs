//! Wardrobe Core
//!
//! Platform-independent logic behind the wardrobe catalogue UI.
//! Nothing in here touches the DOM; the browser layer plugs in through
//! [`repository::KeyValueStore`] and [`navigation::ScreenHooks`].

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod gallery;
pub mod intake;
pub mod navigation;
pub mod repository;

pub use config::WardrobeConfig;
pub use domain::{PendingUpload, StyleTags, WardrobeCollection, WardrobeItem};
pub use error::{FormError, IntakeError, StoreError, WardrobeError};
pub use form::ItemDraft;
pub use gallery::{count_label, GalleryView, ItemCard};
pub use intake::{IntakeSequence, ReadTicket};
pub use navigation::{NavButton, NavCommand, Navigator, Screen, ScreenAction, ScreenHooks, Transition};
pub use repository::{KeyValueStore, MemoryStore, WardrobeRepository};
