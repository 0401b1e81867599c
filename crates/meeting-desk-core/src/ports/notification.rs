use std::{fmt, sync::Arc};

/// How prominently a notification should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine confirmation.
    Info,
    /// Failure the user needs to act on.
    Destructive,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Destructive => f.write_str("destructive"),
        }
    }
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Display severity.
    pub severity: Severity,
}

impl Notification {
    /// Build an [`Severity::Info`] notification.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// Build a [`Severity::Destructive`] notification.
    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Fire-and-forget sink for user-facing notifications.
pub trait NotificationSink {
    /// Surface `notification`. Nothing is returned to the caller.
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}
