//! Core traits defined in `propdocs-core` and implemented by other crates.

pub mod notifier;

pub use notifier::{Notification, NotificationVariant, Notifier};
