use meeting_desk_core::{Notification, NotificationSink, Severity};

use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

/// Toast queue for the terminal.
///
/// The core emits notifications synchronously; the app drains the queue
/// after each event and prints the toasts below the current view.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    pending: Mutex<Vec<Notification>>,
}

impl ConsoleNotifier {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }
}

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!(
                title = %notification.title,
                message = %notification.message,
                "Notification"
            ),
            Severity::Destructive => warn!(
                title = %notification.title,
                message = %notification.message,
                "Destructive notification"
            ),
        }

        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
