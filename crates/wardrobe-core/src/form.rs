//! Item Form
//!
//! Raw form state and the submission path that turns it, plus the
//! pending image, into a stored item.

use crate::domain::{PendingUpload, StyleTags, WardrobeItem, CATEGORIES, SEASONS};
use crate::error::{FormError, WardrobeError};
use crate::repository::{KeyValueStore, WardrobeRepository};

/// Field values as typed, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub category: String,
    pub color: String,
    pub season: String,
    /// Comma-separated tag input
    pub style_tags: String,
}

impl ItemDraft {
    /// Same rules as the form's `required` attributes and option lists;
    /// values are checked, never rewritten
    pub fn validate(&self) -> Result<(), FormError> {
        if self.category.is_empty() {
            return Err(FormError::MissingField("category"));
        }
        if !CATEGORIES.iter().any(|(value, _)| *value == self.category) {
            return Err(FormError::UnknownOption {
                field: "category",
                value: self.category.clone(),
            });
        }
        if self.color.is_empty() {
            return Err(FormError::MissingField("color"));
        }
        if !SEASONS.iter().any(|(value, _)| *value == self.season) {
            return Err(FormError::UnknownOption {
                field: "season",
                value: self.season.clone(),
            });
        }
        Ok(())
    }

    /// Build the item, consuming the pending image
    pub fn into_item(self, upload: PendingUpload, id: i64) -> Result<WardrobeItem, FormError> {
        self.validate()?;
        Ok(WardrobeItem {
            id,
            image: upload.data,
            category: self.category,
            color: self.color,
            season: self.season,
            style_tags: StyleTags::parse(&self.style_tags),
        })
    }
}

/// Append a new item built from the form to the stored collection
///
/// Nothing is written unless the draft is valid, an image is pending and
/// the stored collection could be read; an unreadable slot is left as is.
pub fn submit<S: KeyValueStore>(
    repo: &WardrobeRepository<S>,
    draft: ItemDraft,
    pending: Option<PendingUpload>,
    now_millis: i64,
) -> Result<WardrobeItem, WardrobeError> {
    let upload = pending.ok_or(FormError::MissingImage)?;
    draft.validate()?;

    let mut collection = repo.try_load()?;
    let item = draft.into_item(upload, collection.next_id(now_millis))?;
    collection.push(item.clone());
    repo.save(&collection)?;

    log::info!("[FORM] Added {} item {} ({} total)", item.category, item.id, collection.len());
    Ok(item)
}
