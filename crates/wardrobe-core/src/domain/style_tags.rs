//! Style Tags
//!
//! Free-text tags parsed from a single comma-separated input.

use serde::{Deserialize, Serialize};

/// Ordered list of trimmed, non-empty tags (duplicates allowed)
///
/// A stored `null` reads as no tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Vec<String>")]
pub struct StyleTags(Vec<String>);

impl StyleTags {
    /// Split raw form input on commas, trim each piece, drop empties
    pub fn parse(raw: &str) -> Self {
        raw.split(',').map(str::to_string).collect::<Vec<_>>().into()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl From<Vec<String>> for StyleTags {
    fn from(tags: Vec<String>) -> Self {
        Self(
            tags.into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

impl From<Option<Vec<String>>> for StyleTags {
    fn from(tags: Option<Vec<String>>) -> Self {
        tags.unwrap_or_default().into()
    }
}

impl From<StyleTags> for Vec<String> {
    fn from(tags: StyleTags) -> Self {
        tags.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_drops_empties_keeps_duplicates() {
        let tags = StyleTags::parse(" casual,  , summer,casual ");
        assert_eq!(tags.to_vec(), vec!["casual", "summer", "casual"]);
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(StyleTags::parse("").is_empty());
        assert!(StyleTags::parse(" , ,, ").is_empty());
    }

    #[test]
    fn test_deserialize_cleans_stored_tags() {
        let tags: StyleTags = serde_json::from_str(r#"["  boho ", "", "   "]"#).unwrap();
        assert_eq!(tags.to_vec(), vec!["boho"]);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_deserialize_null_as_no_tags() {
        let tags: StyleTags = serde_json::from_str("null").unwrap();
        assert!(tags.is_empty());
        assert_eq!(serde_json::to_string(&tags).unwrap(), "[]");
    }
}
