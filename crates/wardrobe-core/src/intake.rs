//! Image Intake
//!
//! Validation for picked/dropped files and bookkeeping for the
//! asynchronous reads that turn them into data URLs.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::IMAGE_MIME_PREFIX;
use crate::domain::PendingUpload;
use crate::error::IntakeError;

/// Reject anything whose declared type is not `image/*`
pub fn validate_image(name: &str, mime: &str) -> Result<(), IntakeError> {
    if mime.starts_with(IMAGE_MIME_PREFIX) {
        Ok(())
    } else {
        Err(IntakeError::NotAnImage {
            name: name.to_string(),
            mime: mime.to_string(),
        })
    }
}

/// Validate a selected file and register its read
///
/// A rejected file starts nothing: reads already in flight stay current
/// and whatever is pending stays as it was.
pub fn start(seq: &IntakeSequence, name: &str, mime: &str) -> Result<ReadTicket, IntakeError> {
    validate_image(name, mime)?;
    Ok(seq.begin())
}

/// Handle for one started read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// Orders file reads so only the most recently started one lands
///
/// A read that finishes after a newer selection, or after the upload
/// screen was cleared, is dropped whether it succeeded or failed.
#[derive(Debug, Default)]
pub struct IntakeSequence {
    latest: AtomicU64,
}

impl IntakeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new read, superseding any in flight
    pub fn begin(&self) -> ReadTicket {
        ReadTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Outcome of a finished read, or `None` if it no longer matters
    pub fn settle(
        &self,
        ticket: ReadTicket,
        outcome: Result<PendingUpload, IntakeError>,
    ) -> Option<Result<PendingUpload, IntakeError>> {
        if self.is_current(ticket) {
            Some(outcome)
        } else {
            log::debug!("[UPLOAD] Dropping stale read {:?}", ticket);
            None
        }
    }

    /// Invalidate every outstanding read
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str) -> PendingUpload {
        PendingUpload::new(name.to_string(), "data:image/jpeg;base64,/9j/".to_string()).unwrap()
    }

    fn unreadable(name: &str) -> IntakeError {
        IntakeError::Unreadable {
            name: name.to_string(),
            reason: "file read failed".to_string(),
        }
    }

    #[test]
    fn test_validate_image_types() {
        assert!(validate_image("a.png", "image/png").is_ok());
        assert!(validate_image("a.heic", "image/heic").is_ok());
        assert_eq!(
            validate_image("a.pdf", "application/pdf"),
            Err(IntakeError::NotAnImage {
                name: "a.pdf".to_string(),
                mime: "application/pdf".to_string()
            })
        );
        // browsers report an empty type for unknown extensions
        assert!(validate_image("a.xyz", "").is_err());
    }

    #[test]
    fn test_start_rejects_non_image_without_registering() {
        let seq = IntakeSequence::new();
        let earlier = start(&seq, "coat.jpg", "image/jpeg").unwrap();

        let err = start(&seq, "notes.txt", "text/plain").unwrap_err();
        assert!(matches!(err, IntakeError::NotAnImage { .. }));

        // the earlier read is still the one that lands
        assert!(seq.is_current(earlier));
        assert_eq!(seq.settle(earlier, Ok(upload("coat.jpg"))), Some(Ok(upload("coat.jpg"))));
    }

    #[test]
    fn test_start_rejection_on_fresh_screen_leaves_nothing_pending() {
        let seq = IntakeSequence::new();
        let mut pending: Option<PendingUpload> = None;

        match start(&seq, "report.pdf", "application/pdf") {
            Ok(ticket) => pending = seq.settle(ticket, Ok(upload("report.pdf"))).and_then(Result::ok),
            Err(err) => assert!(matches!(err, IntakeError::NotAnImage { .. })),
        }
        assert!(pending.is_none());
    }

    #[test]
    fn test_last_selected_read_wins() {
        let seq = IntakeSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        // second read completes first, then the slow first one
        assert!(seq.settle(second, Ok(upload("second.jpg"))).is_some());
        assert!(seq.settle(first, Ok(upload("first.jpg"))).is_none());
    }

    #[test]
    fn test_superseded_failure_is_dropped() {
        let seq = IntakeSequence::new();
        let first = seq.begin();
        let _second = seq.begin();
        assert!(seq.settle(first, Err(unreadable("first.jpg"))).is_none());
    }

    #[test]
    fn test_current_failure_is_reported() {
        let seq = IntakeSequence::new();
        let ticket = seq.begin();
        assert_eq!(seq.settle(ticket, Err(unreadable("a.jpg"))), Some(Err(unreadable("a.jpg"))));
    }

    #[test]
    fn test_cancel_drops_in_flight_read() {
        let seq = IntakeSequence::new();
        let ticket = seq.begin();
        seq.cancel();
        assert!(!seq.is_current(ticket));
        assert!(seq.settle(ticket, Ok(upload("late.jpg"))).is_none());
        assert!(seq.settle(ticket, Err(unreadable("late.jpg"))).is_none());
    }
}
