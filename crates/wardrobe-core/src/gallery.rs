//! Wardrobe Gallery Model
//!
//! What the wardrobe screen draws for a given collection. Text is kept
//! raw here; the view layer emits it as text nodes and attributes only.

use crate::domain::{option_label, WardrobeCollection, WardrobeItem, CATEGORIES};

/// "1 item" / "N items"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        format!("{} item", count)
    } else {
        format!("{} items", count)
    }
}

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    /// Position and id; ids from older data may repeat
    pub key: (usize, i64),
    pub image: String,
    pub alt: String,
    /// Category badge text
    pub category: String,
    /// Color badge text
    pub color: String,
    pub tags: Vec<String>,
}

impl ItemCard {
    fn new(index: usize, item: &WardrobeItem) -> Self {
        Self {
            key: (index, item.id),
            image: renderable_image(&item.image),
            alt: item.category.clone(),
            category: option_label(CATEGORIES, &item.category).to_string(),
            color: item.color.clone(),
            tags: item.style_tags.to_vec(),
        }
    }
}

/// Only embedded images are used as a source; anything else renders blank
fn renderable_image(image: &str) -> String {
    if image.starts_with("data:image/") {
        image.to_string()
    } else {
        String::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    /// Placeholder with a call to action to upload
    Empty,
    Cards(Vec<ItemCard>),
}

impl GalleryView {
    pub fn from_collection(collection: &WardrobeCollection) -> Self {
        if collection.is_empty() {
            return GalleryView::Empty;
        }
        GalleryView::Cards(
            collection
                .iter()
                .enumerate()
                .map(|(index, item)| ItemCard::new(index, item))
                .collect(),
        )
    }
}
