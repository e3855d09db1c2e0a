//! Folder create, rename, and cascading delete.

use serde::Serialize;
use tracing::{debug, info};

use propdocs_core::result::AppResult;
use propdocs_core::types::{FileId, FolderId};
use propdocs_entity::folder::Folder;

use crate::manager::DocumentManager;
use crate::notification::NotificationFormatter;

/// Outcome of deleting a folder subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderDeletion {
    /// The deleted folder followed by its descendants.
    pub removed_folders: Vec<FolderId>,
    /// Files moved to the trash by the cascade.
    pub trashed_files: Vec<FileId>,
}

impl DocumentManager {
    /// Creates a folder under `parent_id` (a new root when `None`).
    ///
    /// The parent is expanded so the new folder is visible in the tree.
    pub fn create_folder(&mut self, name: &str, parent_id: Option<FolderId>) -> AppResult<Folder> {
        let folder = self
            .store
            .folders
            .create_folder(name, parent_id)
            .inspect_err(|e| debug!(folder_name = name, parent_id = ?parent_id, error = %e, "Rejected folder creation"))?;

        if let Some(parent_id) = parent_id {
            self.tree.expand(parent_id);
        }

        let path = self.folder_path(folder.id)?;
        info!(folder_id = %folder.id, path = %path, "Folder created");
        self.notify(NotificationFormatter::folder_created(&folder.name, &path));
        Ok(folder)
    }

    /// Renames a folder. Protected folders are rejected.
    pub fn rename_folder(&mut self, id: FolderId, new_name: &str) -> AppResult<()> {
        let old_name = self
            .store
            .folders
            .rename_folder(id, new_name)
            .inspect_err(|e| debug!(folder_id = %id, error = %e, "Rejected folder rename"))?;

        let new_name = self.folder_label(id);
        info!(folder_id = %id, old_name = %old_name, new_name = %new_name, "Folder renamed");
        self.notify(NotificationFormatter::folder_renamed(&old_name, &new_name));
        Ok(())
    }

    /// Deletes a folder and all its descendants.
    ///
    /// Active files in any removed folder are soft-deleted into the trash
    /// so they remain restorable. A selection inside the removed subtree is
    /// cleared.
    pub fn delete_folder(&mut self, id: FolderId) -> AppResult<FolderDeletion> {
        let trash = self.trash_id()?;
        let name = self.folder_label(id);

        let removed_folders = self
            .store
            .folders
            .remove_subtree(id)
            .inspect_err(|e| debug!(folder_id = %id, error = %e, "Rejected folder deletion"))?;
        let trashed_files = self.store.files.move_to_trash(&removed_folders, trash);

        if self
            .view
            .selected_folder
            .is_some_and(|selected| removed_folders.contains(&selected))
        {
            self.view.selected_folder = None;
        }
        self.tree.prune(&removed_folders);

        info!(
            folder_id = %id,
            removed_folders = removed_folders.len(),
            trashed_files = trashed_files.len(),
            "Folder deleted"
        );
        self.notify(NotificationFormatter::folder_deleted(
            &name,
            removed_folders.len(),
            trashed_files.len(),
        ));

        Ok(FolderDeletion {
            removed_folders,
            trashed_files,
        })
    }
}
