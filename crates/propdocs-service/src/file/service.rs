//! File lifecycle: soft delete, restore, purge, and edits.

use tracing::{debug, info, warn};

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::{FileId, FolderId, TagId};
use propdocs_entity::file::File;

use crate::manager::DocumentManager;
use crate::notification::NotificationFormatter;

impl DocumentManager {
    /// Moves a file to the trash.
    ///
    /// Deleting a file that is already in the trash changes nothing and
    /// sends no notification.
    pub fn delete_file(&mut self, id: FileId) -> AppResult<()> {
        let trash = self.trash_id()?;
        let changed = self
            .store
            .files
            .delete_file(id, trash)
            .inspect_err(|e| debug!(file_id = %id, error = %e, "Rejected file deletion"))?;

        if !changed {
            debug!(file_id = %id, "File already in trash");
            return Ok(());
        }

        let name = self.store.files.require(id)?.name.clone();
        info!(file_id = %id, "File moved to trash");
        self.notify(NotificationFormatter::file_deleted(&name));
        Ok(())
    }

    /// Restores a trashed file to the folder it was deleted from.
    ///
    /// When that folder has since been deleted, the file goes to the
    /// Global/Shared root instead. Returns the folder the file now lives in.
    pub fn restore_file(&mut self, id: FileId) -> AppResult<FolderId> {
        let fallback = self.restore_fallback()?;
        let file = self
            .store
            .files
            .require(id)
            .inspect_err(|e| debug!(file_id = %id, error = %e, "Rejected file restore"))?;
        if !file.is_deleted() {
            debug!(file_id = %id, "File is not in trash");
            return Ok(file.folder_id);
        }

        let folders = &self.store.folders;
        let restored = self
            .store
            .files
            .restore_file(id, |folder| folders.contains(folder), fallback)?;

        if restored.used_fallback {
            warn!(
                file_id = %id,
                fallback_folder_id = %restored.folder_id,
                "Original folder no longer exists, restoring to Global/Shared"
            );
        }

        let name = self.store.files.require(id)?.name.clone();
        let folder_name = self.folder_label(restored.folder_id);
        info!(file_id = %id, folder_id = %restored.folder_id, "File restored");
        self.notify(NotificationFormatter::file_restored(&name, &folder_name));
        Ok(restored.folder_id)
    }

    /// Removes a file irreversibly, whether or not it is in the trash.
    pub fn permanent_delete_file(&mut self, id: FileId) -> AppResult<File> {
        let file = self
            .store
            .files
            .permanent_delete_file(id)
            .inspect_err(|e| debug!(file_id = %id, error = %e, "Rejected permanent deletion"))?;

        info!(file_id = %id, name = %file.name, "File permanently deleted");
        self.notify(NotificationFormatter::file_purged(&file.name));
        Ok(file)
    }

    /// Permanently removes every trashed file. Returns the removed records.
    pub fn empty_trash(&mut self) -> Vec<File> {
        let purged = self.store.files.empty_trash();
        if purged.is_empty() {
            debug!("Trash already empty");
            return purged;
        }

        info!(count = purged.len(), "Trash emptied");
        self.notify(NotificationFormatter::trash_emptied(purged.len()));
        purged
    }

    /// Renames a file.
    pub fn rename_file(&mut self, id: FileId, new_name: &str) -> AppResult<()> {
        let old_name = self
            .store
            .files
            .rename_file(id, new_name)
            .inspect_err(|e| debug!(file_id = %id, error = %e, "Rejected file rename"))?;

        let new_name = self.store.files.require(id)?.name.clone();
        info!(file_id = %id, old_name = %old_name, new_name = %new_name, "File renamed");
        self.notify(NotificationFormatter::file_renamed(&old_name, &new_name));
        Ok(())
    }

    /// Replaces a file's tag list. Every tag must exist.
    pub fn update_file_tags(&mut self, id: FileId, tags: &[TagId]) -> AppResult<()> {
        self.require_tags(tags)
            .and_then(|()| self.store.files.update_file_tags(id, tags))
            .inspect_err(|e| debug!(file_id = %id, error = %e, "Rejected tag update"))?;

        let file = self.store.files.require(id)?;
        let (name, count) = (file.name.clone(), file.tags.len());
        info!(file_id = %id, tags = count, "File tags updated");
        self.notify(NotificationFormatter::tags_updated(&name, count));
        Ok(())
    }

    /// Moves an active file into another folder.
    pub fn move_file(&mut self, id: FileId, target: FolderId) -> AppResult<()> {
        self.validate_move_target(target)
            .and_then(|()| self.store.files.move_file(id, target))
            .inspect_err(|e| debug!(file_id = %id, target_folder_id = %target, error = %e, "Rejected file move"))?;

        let name = self.store.files.require(id)?.name.clone();
        let folder_name = self.folder_label(target);
        info!(file_id = %id, folder_id = %target, "File moved");
        self.notify(NotificationFormatter::file_moved(&name, &folder_name));
        Ok(())
    }

    fn validate_move_target(&self, target: FolderId) -> AppResult<()> {
        let folder = self.store.folders.require(target)?;
        if folder.is_trash() {
            return Err(AppError::validation(
                "Use delete to move a file into Trash",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use propdocs_core::config::StoreConfig;
    use propdocs_core::error::ErrorKind;
    use propdocs_entity::file::RawUpload;
    use propdocs_entity::folder::SystemFolder;
    use propdocs_store::DocumentStore;

    use crate::notification::MemoryNotifier;

    use super::*;

    struct Fixture {
        manager: DocumentManager,
        notifier: Arc<MemoryNotifier>,
        folder: FolderId,
        file: FileId,
    }

    fn fixture() -> Fixture {
        let notifier = Arc::new(MemoryNotifier::new());
        let mut manager =
            DocumentManager::new(DocumentStore::new(), StoreConfig::default(), notifier.clone());
        let props = manager.folders().system_folder(SystemFolder::Properties).unwrap().id;
        let folder = manager.create_folder("123 Main St", Some(props)).unwrap().id;
        let file = manager
            .upload_files(vec![RawUpload::new("Lease.pdf", 10, "application/pdf")], folder, &[])
            .unwrap()[0]
            .id;
        notifier.drain();
        Fixture {
            manager,
            notifier,
            folder,
            file,
        }
    }

    #[test]
    fn test_second_delete_is_silent() {
        let mut fx = fixture();
        fx.manager.delete_file(fx.file).unwrap();
        fx.manager.delete_file(fx.file).unwrap();
        assert_eq!(fx.notifier.drain().len(), 1);
        assert_eq!(fx.manager.trash_files().len(), 1);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut fx = fixture();
        fx.manager.delete_file(fx.file).unwrap();
        assert_eq!(fx.manager.restore_file(fx.file).unwrap(), fx.folder);

        let file = fx.manager.files().get(fx.file).unwrap();
        assert!(!file.is_deleted());
        assert_eq!(file.folder_id, fx.folder);
    }

    #[test]
    fn test_restore_falls_back_to_shared() {
        let mut fx = fixture();
        fx.manager.delete_file(fx.file).unwrap();
        fx.manager.delete_folder(fx.folder).unwrap();

        let shared = fx.manager.folders().system_folder(SystemFolder::Shared).unwrap().id;
        assert_eq!(fx.manager.restore_file(fx.file).unwrap(), shared);
    }

    #[test]
    fn test_restore_active_file_is_noop() {
        let mut fx = fixture();
        assert_eq!(fx.manager.restore_file(fx.file).unwrap(), fx.folder);
        assert!(fx.notifier.drain().is_empty());
    }

    #[test]
    fn test_empty_trash_only_purges_deleted() {
        let mut fx = fixture();
        assert!(fx.manager.empty_trash().is_empty());
        assert!(fx.notifier.drain().is_empty());

        fx.manager
            .upload_files(vec![RawUpload::new("Keep.pdf", 1, "application/pdf")], fx.folder, &[])
            .unwrap();
        fx.manager.delete_file(fx.file).unwrap();
        let purged = fx.manager.empty_trash();
        assert_eq!(purged.len(), 1);
        assert_eq!(fx.manager.files().len(), 1);
    }

    #[test]
    fn test_update_tags_rejects_unknown_tag() {
        let mut fx = fixture();
        let err = fx.manager.update_file_tags(fx.file, &[TagId::new()]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(fx.notifier.drain().is_empty());
    }

    #[test]
    fn test_move_file_rejects_trash_target() {
        let mut fx = fixture();
        let trash = fx.manager.folders().trash_id().unwrap();
        assert_eq!(
            fx.manager.move_file(fx.file, trash).unwrap_err().kind,
            ErrorKind::Validation
        );

        let shared = fx.manager.folders().system_folder(SystemFolder::Shared).unwrap().id;
        fx.manager.move_file(fx.file, shared).unwrap();
        assert_eq!(fx.manager.files().get(fx.file).unwrap().folder_id, shared);
    }

    #[test]
    fn test_permanent_delete() {
        let mut fx = fixture();
        fx.manager.permanent_delete_file(fx.file).unwrap();
        assert!(fx.manager.files().is_empty());
        assert_eq!(
            fx.manager.permanent_delete_file(fx.file).unwrap_err().kind,
            ErrorKind::NotFound
        );
    }
}
