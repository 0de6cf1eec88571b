//! Wardrobe Collection
//!
//! The whole ordered list of items, always loaded and saved as one value.

use serde::{Deserialize, Serialize};

use super::WardrobeItem;

/// All items in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WardrobeCollection(Vec<WardrobeItem>);

impl WardrobeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WardrobeItem> {
        self.0.iter()
    }

    pub fn push(&mut self, item: WardrobeItem) {
        self.0.push(item);
    }

    pub fn into_items(self) -> Vec<WardrobeItem> {
        self.0
    }

    /// Id for an item created at `now_millis`
    ///
    /// Uses the timestamp unless an existing item already claims it or a
    /// later one, in which case it continues after the largest id.
    pub fn next_id(&self, now_millis: i64) -> i64 {
        match self.0.iter().map(|item| item.id).max() {
            Some(max_id) if max_id >= now_millis => max_id + 1,
            _ => now_millis,
        }
    }
}

impl From<Vec<WardrobeItem>> for WardrobeCollection {
    fn from(items: Vec<WardrobeItem>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a WardrobeCollection {
    type Item = &'a WardrobeItem;
    type IntoIter = std::slice::Iter<'a, WardrobeItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StyleTags;

    fn item(id: i64) -> WardrobeItem {
        WardrobeItem {
            id,
            image: "data:image/png;base64,AA".to_string(),
            category: "top".to_string(),
            color: "white".to_string(),
            season: String::new(),
            style_tags: StyleTags::default(),
        }
    }

    #[test]
    fn test_next_id_uses_timestamp_when_free() {
        let collection = WardrobeCollection::from(vec![item(100), item(200)]);
        assert_eq!(collection.next_id(500), 500);
        assert_eq!(WardrobeCollection::new().next_id(42), 42);
    }

    #[test]
    fn test_next_id_steps_past_collisions() {
        let collection = WardrobeCollection::from(vec![item(100), item(500)]);
        assert_eq!(collection.next_id(500), 501);
        // clock went backwards
        assert_eq!(collection.next_id(300), 501);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&WardrobeCollection::new()).unwrap();
        assert_eq!(json, "[]");
    }
}
