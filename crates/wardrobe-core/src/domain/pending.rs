//! Pending Upload
//!
//! The previewed image waiting for its metadata. Lives only in memory and
//! is handed to the form by value.

use crate::error::IntakeError;

/// Image read from a picked or dropped file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    /// Original file name
    pub name: String,
    /// Data URL, directly usable as an image source
    pub data: String,
}

impl PendingUpload {
    pub fn new(name: String, data: String) -> Result<Self, IntakeError> {
        if !data.starts_with("data:") {
            return Err(IntakeError::Unreadable {
                name,
                reason: "reader did not produce a data URL".to_string(),
            });
        }
        Ok(Self { name, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_data_url() {
        let upload = PendingUpload::new("shirt.png".to_string(), "data:image/png;base64,iVBOR".to_string()).unwrap();
        assert_eq!(upload.name, "shirt.png");
    }

    #[test]
    fn test_rejects_other_text() {
        let err = PendingUpload::new("shirt.png".to_string(), "blob:xyz".to_string()).unwrap_err();
        assert!(matches!(err, IntakeError::Unreadable { .. }));
    }
}
