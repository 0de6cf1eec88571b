//! Repository Layer
//!
//! Key-value storage abstraction and the wardrobe repository on top of it.

mod store;
mod wardrobe_repo;


pub use store::{KeyValueStore, MemoryStore};
pub use wardrobe_repo::WardrobeRepository;
