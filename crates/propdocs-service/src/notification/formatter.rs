//! Notification message formatting.

use propdocs_core::traits::Notification;

/// Formats toast messages for document-management events.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// A folder was created.
    pub fn folder_created(name: &str, path: &str) -> Notification {
        Notification::new("Folder created").description(format!("'{name}' created at {path}"))
    }

    /// A folder was renamed.
    pub fn folder_renamed(old_name: &str, new_name: &str) -> Notification {
        Notification::new("Folder renamed")
            .description(format!("'{old_name}' is now '{new_name}'"))
    }

    /// A folder subtree was deleted.
    pub fn folder_deleted(name: &str, folder_count: usize, trashed_files: usize) -> Notification {
        let subfolders = folder_count.saturating_sub(1);
        Notification::new("Folder deleted").description(format!(
            "'{name}' and {subfolders} subfolder(s) removed; {trashed_files} file(s) moved to Trash"
        ))
    }

    /// A batch of files was uploaded.
    pub fn files_uploaded(count: usize, folder_name: &str) -> Notification {
        Notification::new("Upload complete")
            .description(format!("{count} file(s) uploaded to '{folder_name}'"))
    }

    /// A file was moved to the trash.
    pub fn file_deleted(name: &str) -> Notification {
        Notification::new("File moved to Trash").description(format!("'{name}' can be restored from Trash"))
    }

    /// A file was restored from the trash.
    pub fn file_restored(name: &str, folder_name: &str) -> Notification {
        Notification::new("File restored").description(format!("'{name}' restored to '{folder_name}'"))
    }

    /// A file was removed permanently.
    pub fn file_purged(name: &str) -> Notification {
        Notification::new("File permanently deleted")
            .description(format!("'{name}' cannot be recovered"))
            .destructive()
    }

    /// A file was renamed.
    pub fn file_renamed(old_name: &str, new_name: &str) -> Notification {
        Notification::new("File renamed").description(format!("'{old_name}' is now '{new_name}'"))
    }

    /// A file was moved to another folder.
    pub fn file_moved(name: &str, folder_name: &str) -> Notification {
        Notification::new("File moved").description(format!("'{name}' moved to '{folder_name}'"))
    }

    /// A file's tags were replaced.
    pub fn tags_updated(name: &str, tag_count: usize) -> Notification {
        Notification::new("Tags updated").description(format!("'{name}' now has {tag_count} tag(s)"))
    }

    /// The trash was emptied.
    pub fn trash_emptied(count: usize) -> Notification {
        Notification::new("Trash emptied")
            .description(format!("{count} file(s) permanently deleted"))
            .destructive()
    }

    /// A tag was created.
    pub fn tag_created(name: &str) -> Notification {
        Notification::new("Tag created").description(format!("'{name}' is ready to use"))
    }

    /// A tag was deleted.
    pub fn tag_deleted(name: &str, detached: usize) -> Notification {
        Notification::new("Tag deleted")
            .description(format!("'{name}' removed from {detached} file(s)"))
    }
}
