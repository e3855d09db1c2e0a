//! Notifier implementations.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use propdocs_core::traits::{Notification, NotificationVariant, Notifier};

/// Emits every notification as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let destructive = notification.variant == NotificationVariant::Destructive;
        info!(
            title = %notification.title,
            description = notification.description.as_deref().unwrap_or(""),
            destructive,
            "Notification"
        );
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Buffers notifications until they are drained.
///
/// The shell drains it after each command to print toasts; tests use it to
/// assert on feedback.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    pending: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all buffered notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *pending)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_drains_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify(Notification::new("first"));
        notifier.notify(Notification::new("second"));

        let titles: Vec<String> = notifier.drain().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert!(notifier.drain().is_empty());
    }
}
