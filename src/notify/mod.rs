//! Notification categories the server can forward to Slack.
//!
//! The server stores the active categories as a single integer bitmask.
//! This module gives the bits names and wraps the mask in a small set type
//! used by the settings panel and the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single notification category.
///
/// The discriminant bits mirror the server's notification enum and must not
/// be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// A new request is waiting for approval
    MediaPending,
    /// A request was approved
    MediaApproved,
    /// Requested media became available
    MediaAvailable,
    /// Processing a request failed
    MediaFailed,
    /// A request was declined
    MediaDeclined,
    /// A user reported an issue
    IssueCreated,
}

impl NotificationType {
    /// All categories shown in the settings panel, in display order.
    pub const ALL: [NotificationType; 6] = [
        NotificationType::MediaPending,
        NotificationType::MediaApproved,
        NotificationType::MediaAvailable,
        NotificationType::MediaFailed,
        NotificationType::MediaDeclined,
        NotificationType::IssueCreated,
    ];

    /// Bit value used in the server's `types` bitmask.
    pub const fn bit(self) -> u32 {
        match self {
            NotificationType::MediaPending => 2,
            NotificationType::MediaApproved => 4,
            NotificationType::MediaAvailable => 8,
            NotificationType::MediaFailed => 16,
            NotificationType::MediaDeclined => 64,
            NotificationType::IssueCreated => 256,
        }
    }

    /// Short label for checkboxes and CLI output.
    pub const fn display_name(self) -> &'static str {
        match self {
            NotificationType::MediaPending => "Request Pending Approval",
            NotificationType::MediaApproved => "Request Approved",
            NotificationType::MediaAvailable => "Media Available",
            NotificationType::MediaFailed => "Processing Failed",
            NotificationType::MediaDeclined => "Request Declined",
            NotificationType::IssueCreated => "Issue Reported",
        }
    }

    /// One-line description shown next to the checkbox.
    pub const fn description(self) -> &'static str {
        match self {
            NotificationType::MediaPending => "a new request is waiting for approval",
            NotificationType::MediaApproved => "a request is manually approved",
            NotificationType::MediaAvailable => "requested media becomes available",
            NotificationType::MediaFailed => "media fails to be added",
            NotificationType::MediaDeclined => "a request is declined",
            NotificationType::IssueCreated => "a new issue is reported",
        }
    }
}

/// Set of notification categories, stored as the server's `types` bitmask.
///
/// Bits this client does not know about are carried through untouched, so a
/// round-trip through the panel never drops categories added by a newer
/// server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationTypes(u32);

impl NotificationTypes {
    /// The empty set.
    pub const fn empty() -> Self {
        NotificationTypes(0)
    }

    /// Build a set from a raw server bitmask.
    pub const fn from_bits(bits: u32) -> Self {
        NotificationTypes(bits)
    }

    /// Raw bitmask as sent to the server.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, ty: NotificationType) -> bool {
        self.0 & ty.bit() != 0
    }

    pub fn insert(&mut self, ty: NotificationType) {
        self.0 |= ty.bit();
    }

    pub fn remove(&mut self, ty: NotificationType) {
        self.0 &= !ty.bit();
    }

    /// Insert or remove `ty` depending on `on`.
    pub fn set(&mut self, ty: NotificationType, on: bool) {
        if on {
            self.insert(ty);
        } else {
            self.remove(ty);
        }
    }
}

impl fmt::Display for NotificationTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ty in NotificationType::ALL {
            if self.contains(ty) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", ty.display_name())?;
                first = false;
            }
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}
