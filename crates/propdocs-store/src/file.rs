//! In-memory file registry with soft-delete and trash semantics.

use std::collections::HashSet;

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::{FileId, FolderId, TagId};
use propdocs_entity::file::{File, FileStatus, RawUpload};

/// Flat collection of file records.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    /// All files in insertion order.
    files: Vec<File>,
}

/// Result of restoring a soft-deleted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restored {
    /// Folder the file now lives in.
    pub folder_id: FolderId,
    /// True when the previous folder was gone and the fallback was used.
    pub used_fallback: bool,
}

impl FileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a file by ID.
    pub fn get(&self, id: FileId) -> Option<&File> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Finds a file by ID or returns a not-found error.
    pub fn require(&self, id: FileId) -> AppResult<&File> {
        self.get(id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    fn require_mut(&mut self, id: FileId) -> AppResult<&mut File> {
        self.files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// All files in insertion order.
    pub fn all(&self) -> &[File] {
        &self.files
    }

    /// Number of files (including deleted ones).
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files whose `folder_id` equals `folder_id`. No recursion into subfolders.
    pub fn in_folder(&self, folder_id: FolderId) -> impl Iterator<Item = &File> {
        self.files.iter().filter(move |f| f.folder_id == folder_id)
    }

    /// All soft-deleted files.
    pub fn deleted(&self) -> impl Iterator<Item = &File> {
        self.files.iter().filter(|f| f.is_deleted())
    }

    /// Creates one record per descriptor and appends them as a batch.
    ///
    /// The file type is derived from each descriptor's MIME type here and
    /// never recomputed afterwards.
    pub fn upload_files(
        &mut self,
        raw: Vec<RawUpload>,
        folder_id: FolderId,
        tags: &[TagId],
    ) -> Vec<File> {
        let tags = dedup_tags(tags);
        let created: Vec<File> = raw
            .into_iter()
            .map(|upload| File::from_upload(upload, folder_id, tags.clone()))
            .collect();
        self.files.extend(created.iter().cloned());
        created
    }

    /// Appends a prebuilt record (used when loading seed data).
    pub fn insert(&mut self, file: File) -> AppResult<()> {
        if self.get(file.id).is_some() {
            return Err(AppError::conflict(format!("File {} already exists", file.id)));
        }
        self.files.push(file);
        Ok(())
    }

    /// Soft-deletes a file into the trash.
    ///
    /// Returns `false` when the file was already deleted; the state is left
    /// untouched in that case.
    pub fn delete_file(&mut self, id: FileId, trash_id: FolderId) -> AppResult<bool> {
        let file = self.require_mut(id)?;
        if file.is_deleted() {
            return Ok(false);
        }
        file.status = FileStatus::Deleted {
            previous_folder_id: file.folder_id,
        };
        file.folder_id = trash_id;
        file.touch();
        Ok(true)
    }

    /// Soft-deletes every active file located in one of `folder_ids`.
    pub fn move_to_trash(&mut self, folder_ids: &[FolderId], trash_id: FolderId) -> Vec<FileId> {
        let mut moved = Vec::new();
        for file in self
            .files
            .iter_mut()
            .filter(|f| !f.is_deleted() && folder_ids.contains(&f.folder_id))
        {
            file.status = FileStatus::Deleted {
                previous_folder_id: file.folder_id,
            };
            file.folder_id = trash_id;
            file.touch();
            moved.push(file.id);
        }
        moved
    }

    /// Restores a soft-deleted file to the folder it was deleted from.
    ///
    /// `folder_exists` decides whether that folder is still present; when it
    /// is not, the file goes to `fallback`. Restoring an active file is a
    /// no-op that reports its current folder.
    pub fn restore_file(
        &mut self,
        id: FileId,
        folder_exists: impl Fn(FolderId) -> bool,
        fallback: FolderId,
    ) -> AppResult<Restored> {
        let file = self.require_mut(id)?;
        let Some(previous) = file.previous_folder_id() else {
            return Ok(Restored {
                folder_id: file.folder_id,
                used_fallback: false,
            });
        };

        let used_fallback = !folder_exists(previous);
        let target = if used_fallback { fallback } else { previous };

        file.status = FileStatus::Active;
        file.folder_id = target;
        file.touch();

        Ok(Restored {
            folder_id: target,
            used_fallback,
        })
    }

    /// Removes a record irreversibly.
    pub fn permanent_delete_file(&mut self, id: FileId) -> AppResult<File> {
        let index = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;
        Ok(self.files.remove(index))
    }

    /// Permanently removes every soft-deleted file.
    pub fn empty_trash(&mut self) -> Vec<File> {
        let (deleted, kept): (Vec<File>, Vec<File>) =
            std::mem::take(&mut self.files).into_iter().partition(File::is_deleted);
        self.files = kept;
        deleted
    }

    /// Renames a file in place. Returns the previous name.
    pub fn rename_file(&mut self, id: FileId, new_name: &str) -> AppResult<String> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }
        let file = self.require_mut(id)?;
        let old = std::mem::replace(&mut file.name, new_name.to_string());
        file.touch();
        Ok(old)
    }

    /// Replaces the file's tag list wholesale.
    pub fn update_file_tags(&mut self, id: FileId, tags: &[TagId]) -> AppResult<()> {
        let file = self.require_mut(id)?;
        file.tags = dedup_tags(tags);
        file.touch();
        Ok(())
    }

    /// Moves an active file into another folder. Returns the source folder.
    pub fn move_file(&mut self, id: FileId, target: FolderId) -> AppResult<FolderId> {
        let file = self.require_mut(id)?;
        if file.is_deleted() {
            return Err(AppError::validation(
                "Deleted files must be restored before they can be moved",
            ));
        }
        let source = std::mem::replace(&mut file.folder_id, target);
        file.touch();
        Ok(source)
    }

    /// Removes `tag_id` from every file. Returns how many files changed.
    pub fn detach_tag(&mut self, tag_id: TagId) -> usize {
        let mut changed = 0;
        for file in self.files.iter_mut().filter(|f| f.has_tag(tag_id)) {
            file.tags.retain(|t| *t != tag_id);
            changed += 1;
        }
        changed
    }
}

/// Drops repeated tag ids while keeping first-seen order.
fn dedup_tags(tags: &[TagId]) -> Vec<TagId> {
    let mut seen = HashSet::new();
    tags.iter().copied().filter(|t| seen.insert(*t)).collect()
}
