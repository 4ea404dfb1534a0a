//! Notice content for the notification/toast sink
//!
//! The core produces the human-readable message for each outcome; rendering
//! belongs to whatever toast layer the UI uses.

use crate::error::Error;
use crate::models::Space;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A renderable success/failure message keyed to a core operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub detail: String,
}

impl Notice {
    fn success(title: &str, detail: String) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            detail,
        }
    }

    fn error(title: &str, detail: String) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            detail,
        }
    }

    pub fn space_added(space: &Space) -> Self {
        Self::success(
            "Space selected",
            format!("'{}' was added to your selection.", space.name),
        )
    }

    /// Message names the space's current status, not a generic failure
    pub fn space_unavailable(space: &Space) -> Self {
        Self::error(
            "Space unavailable",
            format!(
                "'{}' is currently {}.",
                space.name,
                space.status.label().to_lowercase()
            ),
        )
    }

    pub fn space_removed(name: &str) -> Self {
        Self::success(
            "Space removed",
            format!("'{}' was removed from your selection.", name),
        )
    }

    pub fn selection_cleared() -> Self {
        Self::success("Selection cleared", "All spaces were removed.".into())
    }

    pub fn reservation_submitted() -> Self {
        Self::success(
            "Reservation submitted",
            "Your reservation request was sent for review.".into(),
        )
    }

    pub fn reservation_failed(err: &Error) -> Self {
        Self::error("Reservation failed", err.to_string())
    }

    pub fn reservation_cancelled() -> Self {
        Self::success(
            "Reservation cancelled",
            "Your reservation was cancelled.".into(),
        )
    }

    pub fn cancellation_failed(err: &Error) -> Self {
        Self::error("Cancellation failed", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_unavailable_notice_names_current_status() {
        let catalog = seed::catalog();
        let reserved = catalog.space("space-003").unwrap();
        let notice = Notice::space_unavailable(reserved);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.detail.contains("reserved"));

        let hot = catalog.space("space-006").unwrap();
        let notice = Notice::space_unavailable(hot);
        assert!(notice.detail.contains("high demand"));
    }

    #[test]
    fn test_validation_failure_message_carries_reason() {
        let err = Error::EmptySelection;
        let notice = Notice::reservation_failed(&err);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.detail.contains("No spaces selected"));
    }
}
