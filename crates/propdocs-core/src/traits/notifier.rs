//! Notifier trait for short-lived user-facing feedback ("toasts").

use serde::{Deserialize, Serialize};

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Regular success/info toast.
    #[default]
    Default,
    /// Destructive or failed action.
    Destructive,
}

/// A fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Optional detail line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display variant.
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    /// Create a default-variant notification with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NotificationVariant::Default,
        }
    }

    /// Attach a description line.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the notification as destructive.
    pub fn destructive(mut self) -> Self {
        self.variant = NotificationVariant::Destructive;
        self
    }
}

/// Sink for user-facing notifications.
///
/// Callers never wait on or branch on delivery.
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver a notification.
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let n = Notification::new("Folder deleted")
            .description("Inspections moved to trash")
            .destructive();
        assert_eq!(n.title, "Folder deleted");
        assert_eq!(n.description.as_deref(), Some("Inspections moved to trash"));
        assert_eq!(n.variant, NotificationVariant::Destructive);
    }

    #[test]
    fn test_serialize_omits_empty_description() {
        let json = serde_json::to_value(Notification::new("Saved")).expect("serialize");
        assert_eq!(json, serde_json::json!({"title": "Saved", "variant": "default"}));
    }
}
