//! Batch upload into a folder.

use tracing::{debug, info};

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::{FolderId, TagId};
use propdocs_entity::file::{format_size, File, RawUpload};

use crate::manager::DocumentManager;
use crate::notification::NotificationFormatter;

impl DocumentManager {
    /// Uploads a batch of files into `folder_id`, tagging each with `tags`.
    ///
    /// The batch is validated as a whole before anything is stored, so
    /// either every file is created or none is.
    pub fn upload_files(
        &mut self,
        raw: Vec<RawUpload>,
        folder_id: FolderId,
        tags: &[TagId],
    ) -> AppResult<Vec<File>> {
        self.validate_upload(&raw, folder_id, tags)
            .inspect_err(|e| debug!(folder_id = %folder_id, error = %e, "Rejected upload"))?;

        let total_bytes: u64 = raw.iter().map(|r| r.size).sum();
        let created = self.store.files.upload_files(raw, folder_id, tags);

        let folder_name = self.folder_label(folder_id);
        info!(
            folder_id = %folder_id,
            count = created.len(),
            total_bytes,
            "Files uploaded"
        );
        self.notify(NotificationFormatter::files_uploaded(created.len(), &folder_name));
        Ok(created)
    }

    fn validate_upload(&self, raw: &[RawUpload], folder_id: FolderId, tags: &[TagId]) -> AppResult<()> {
        if raw.is_empty() {
            return Err(AppError::validation("No files selected for upload"));
        }

        let folder = self.store.folders.require(folder_id)?;
        if folder.is_trash() {
            return Err(AppError::validation("Files cannot be uploaded into Trash"));
        }
        self.require_tags(tags)?;

        let limit = self.config.max_upload_size_bytes;
        for upload in raw {
            if upload.name.trim().is_empty() {
                return Err(AppError::validation("File name cannot be empty"));
            }
            if upload.size > limit {
                return Err(AppError::validation(format!(
                    "'{}' is {}, which exceeds the {} upload limit",
                    upload.name,
                    format_size(upload.size),
                    format_size(limit)
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use propdocs_core::config::StoreConfig;
    use propdocs_core::error::ErrorKind;
    use propdocs_entity::file::FileType;
    use propdocs_entity::folder::SystemFolder;
    use propdocs_store::DocumentStore;

    use crate::notification::NoopNotifier;

    use super::*;

    fn manager(limit: u64) -> (DocumentManager, FolderId) {
        let config = StoreConfig {
            max_upload_size_bytes: limit,
            ..StoreConfig::default()
        };
        let m = DocumentManager::new(DocumentStore::new(), config, Arc::new(NoopNotifier));
        let shared = m.folders().system_folder(SystemFolder::Shared).unwrap().id;
        (m, shared)
    }

    #[test]
    fn test_upload_classifies_and_places_files() {
        let (mut m, shared) = manager(1_000_000);
        let created = m
            .upload_files(
                vec![
                    RawUpload::new("Front.jpg", 1_000, "image/jpeg"),
                    RawUpload::new("Notes.txt", 10, "text/plain"),
                ],
                shared,
                &[],
            )
            .unwrap();

        assert_eq!(created[0].file_type, FileType::Image);
        assert_eq!(created[1].file_type, FileType::Other);
        assert!(created.iter().all(|f| f.folder_id == shared && f.version == 1));
    }

    #[test]
    fn test_oversized_file_rejects_whole_batch() {
        let (mut m, shared) = manager(100);
        let err = m
            .upload_files(
                vec![
                    RawUpload::new("small.pdf", 10, "application/pdf"),
                    RawUpload::new("big.pdf", 101, "application/pdf"),
                ],
                shared,
                &[],
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(m.files().is_empty());
    }

    #[test]
    fn test_upload_target_checks() {
        let (mut m, _) = manager(100);
        let trash = m.folders().trash_id().unwrap();
        let doc = || vec![RawUpload::new("a.pdf", 1, "application/pdf")];

        assert_eq!(m.upload_files(doc(), trash, &[]).unwrap_err().kind, ErrorKind::Validation);
        assert_eq!(
            m.upload_files(doc(), FolderId::new(), &[]).unwrap_err().kind,
            ErrorKind::NotFound
        );
        let shared = m.folders().system_folder(SystemFolder::Shared).unwrap().id;
        assert_eq!(
            m.upload_files(doc(), shared, &[TagId::new()]).unwrap_err().kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            m.upload_files(Vec::new(), shared, &[]).unwrap_err().kind,
            ErrorKind::Validation
        );
    }
}
