//! Form Options
//!
//! (value, label) pairs for the fixed choice fields.

pub const CATEGORIES: &[(&str, &str)] = &[
    ("top", "Top"),
    ("bottom", "Bottom"),
    ("dress", "Dress"),
    ("outerwear", "Outerwear"),
    ("shoes", "Shoes"),
    ("accessory", "Accessory"),
];

/// The empty value means the item suits any season
pub const SEASONS: &[(&str, &str)] = &[
    ("", "Any season"),
    ("spring", "Spring"),
    ("summer", "Summer"),
    ("fall", "Fall"),
    ("winter", "Winter"),
    ("all", "All seasons"),
];

/// Offered as suggestions; color itself is free text
pub const COLOR_SUGGESTIONS: &[&str] = &[
    "black", "white", "gray", "navy", "blue", "red", "green", "yellow", "brown", "beige", "pink",
    "purple", "orange", "multicolor",
];

/// Display label for a stored value, falling back to the value itself
pub fn option_label<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(CATEGORIES, "shoes"), "Shoes");
        assert_eq!(option_label(CATEGORIES, "scarf"), "scarf");
        assert_eq!(option_label(SEASONS, ""), "Any season");
    }
}
