//! User-facing notifications: message formatting and notifier sinks.

pub mod formatter;
pub mod notifier;

pub use formatter::NotificationFormatter;
pub use notifier::{LogNotifier, MemoryNotifier, NoopNotifier};
