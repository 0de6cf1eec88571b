//! Error Types
//!
//! Every failure the UI can hit ends up as one blocking alert, so each
//! error knows the message it should show.

use thiserror::Error;

use crate::config::{ALERT_CORRUPT_WARDROBE, ALERT_MISSING_IMAGE, ALERT_NOT_AN_IMAGE, ALERT_UNREADABLE};

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Problems with a file the user picked or dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("{name} is not an image (type {mime:?})")]
    NotAnImage { name: String, mime: String },
    #[error("could not read {name}: {reason}")]
    Unreadable { name: String, reason: String },
}

/// Form state that cannot become an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no image has been selected")]
    MissingImage,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown {field} {value:?}")]
    UnknownOption { field: &'static str, value: String },
}

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read storage: {0}")]
    Read(String),
    #[error("failed to write storage: {0}")]
    Write(String),
    #[error("stored value under {key:?} is not a wardrobe")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize wardrobe: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Any failure surfaced to the user
#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WardrobeError {
    /// Text for the blocking alert
    pub fn user_message(&self) -> String {
        match self {
            WardrobeError::Intake(IntakeError::NotAnImage { .. }) => ALERT_NOT_AN_IMAGE.to_string(),
            WardrobeError::Intake(IntakeError::Unreadable { .. }) => ALERT_UNREADABLE.to_string(),
            WardrobeError::Form(FormError::MissingImage) => ALERT_MISSING_IMAGE.to_string(),
            WardrobeError::Form(err) => format!("Please check the form: {}", err),
            WardrobeError::Store(StoreError::Corrupt { .. }) => ALERT_CORRUPT_WARDROBE.to_string(),
            WardrobeError::Store(err) => format!("Could not save your wardrobe: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_image_alert_text() {
        let err: WardrobeError = IntakeError::NotAnImage {
            name: "notes.txt".to_string(),
            mime: "text/plain".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Please upload an image file");
    }

    #[test]
    fn test_store_error_message() {
        let err: WardrobeError = StoreError::Write("QuotaExceededError".to_string()).into();
        assert_eq!(
            err.user_message(),
            "Could not save your wardrobe: failed to write storage: QuotaExceededError"
        );
    }

    #[test]
    fn test_corrupt_wardrobe_message() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: WardrobeError = StoreError::Corrupt {
            key: "wardrobe".to_string(),
            source,
        }
        .into();
        assert_eq!(
            err.user_message(),
            "Your saved wardrobe could not be read, so the new item was not saved"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err: WardrobeError = FormError::MissingField("category").into();
        assert_eq!(err.user_message(), "Please check the form: category is required");
    }
}
