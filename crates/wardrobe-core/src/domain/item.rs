//! Wardrobe Item Entity
//!
//! One catalogued piece of clothing. Created once on form submission and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::StyleTags;

/// A catalogued clothing item
///
/// Field names on the wire match what the page has always written to
/// `localStorage`, so existing wardrobes keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    /// Creation time in epoch milliseconds, unique within a collection
    pub id: i64,
    /// Self-describing data URL of the original image
    pub image: String,
    pub category: String,
    pub color: String,
    /// Empty means any season
    #[serde(default)]
    pub season: String,
    #[serde(rename = "styleTags", default)]
    pub style_tags: StyleTags,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WardrobeItem {
        WardrobeItem {
            id: 1_700_000_000_000,
            image: "data:image/png;base64,AAAA".to_string(),
            category: "top".to_string(),
            color: "navy".to_string(),
            season: "summer".to_string(),
            style_tags: StyleTags::parse("casual, linen"),
        }
    }

    #[test]
    fn test_serializes_with_stored_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["styleTags"], serde_json::json!(["casual", "linen"]));
        assert!(json.get("style_tags").is_none());
        assert_eq!(json["id"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_missing_tags_and_season_default_to_empty() {
        let json = r#"{"id":5,"image":"data:image/png;base64,AA","category":"shoes","color":"red"}"#;
        let item: WardrobeItem = serde_json::from_str(json).unwrap();
        assert!(item.style_tags.is_empty());
        assert_eq!(item.season, "");
    }
}
