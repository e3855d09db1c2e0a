//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use propdocs_core::types::{FileId, FolderId, TagId};

use super::kind::FileType;

/// Lifecycle state of a file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Visible in its folder.
    #[default]
    Active,
    /// Soft-deleted; the file sits in the trash folder.
    Deleted {
        /// Folder the file lived in when it was deleted.
        previous_folder_id: FolderId,
    },
}

/// A file descriptor as supplied by the upload picker.
///
/// Only metadata is carried; no bytes are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUpload {
    /// File name including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the picker.
    pub mime_type: String,
}

impl RawUpload {
    /// Create a new upload descriptor.
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// A document stored in PropDocs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// The folder containing this file (the trash folder while deleted).
    pub folder_id: FolderId,
    /// The file name (including extension).
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// MIME type of the file.
    pub mime_type: String,
    /// Category derived from the MIME type at upload time.
    pub file_type: FileType,
    /// When the file was uploaded.
    pub upload_date: DateTime<Utc>,
    /// When the record was last changed.
    pub last_modified: DateTime<Utc>,
    /// Attached tag ids.
    #[serde(default)]
    pub tags: Vec<TagId>,
    /// Display version number.
    pub version: u32,
    /// Active or soft-deleted.
    #[serde(flatten)]
    pub status: FileStatus,
}

impl File {
    /// Build a new active file record from an upload descriptor.
    pub fn from_upload(raw: RawUpload, folder_id: FolderId, tags: Vec<TagId>) -> Self {
        let now = Utc::now();
        Self {
            id: FileId::new(),
            folder_id,
            file_type: FileType::from_mime(&raw.mime_type),
            name: raw.name,
            size: raw.size,
            mime_type: raw.mime_type,
            upload_date: now,
            last_modified: now,
            tags,
            version: 1,
            status: FileStatus::Active,
        }
    }

    /// Whether the file has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self.status, FileStatus::Deleted { .. })
    }

    /// Folder to restore the file into, if it is deleted.
    pub fn previous_folder_id(&self) -> Option<FolderId> {
        match self.status {
            FileStatus::Deleted { previous_folder_id } => Some(previous_folder_id),
            FileStatus::Active => None,
        }
    }

    /// Whether a tag is attached.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.contains(&tag_id)
    }

    /// Record a modification.
    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
