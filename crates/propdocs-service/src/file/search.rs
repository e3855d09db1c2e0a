//! Folder-scoped file search and filtering.
//!
//! The visible file list is recomputed from scratch on every call; there is
//! no index. Conditions are applied in a fixed order and all must hold:
//! folder selected, exact folder match, search text, tag filter, type filter.

use serde::{Deserialize, Serialize};

use propdocs_core::types::{FolderId, TagId};
use propdocs_entity::file::{File, FileType};
use propdocs_store::{FileRegistry, TagRegistry, fold_name};

/// Restricts the list to files carrying one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tag_id", rename_all = "snake_case")]
pub enum TagFilter {
    /// No tag restriction.
    #[default]
    All,
    /// Only files tagged with this ID.
    Tag(TagId),
}

/// Restricts the list to one file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "file_type", rename_all = "snake_case")]
pub enum TypeFilter {
    /// No type restriction.
    #[default]
    All,
    /// Only files of this type.
    Type(FileType),
}

/// Search text plus tag and type filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Case-insensitive substring matched against file and tag names.
    pub search: String,
    /// Tag restriction.
    pub tag: TagFilter,
    /// File type restriction.
    pub file_type: TypeFilter,
}

impl FileFilter {
    /// Whether no restriction is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.tag == TagFilter::All && self.file_type == TypeFilter::All
    }

    /// Applies the search, tag, and type conditions to one file.
    pub fn matches(&self, file: &File, tags: &TagRegistry) -> bool {
        self.matches_search(file, tags) && self.matches_tag(file) && self.matches_type(file)
    }

    fn matches_search(&self, file: &File, tags: &TagRegistry) -> bool {
        let needle = fold_name(self.search.trim());
        if needle.is_empty() {
            return true;
        }
        fold_name(&file.name).contains(&needle)
            || file
                .tags
                .iter()
                .filter_map(|id| tags.get(*id))
                .any(|tag| fold_name(&tag.name).contains(&needle))
    }

    fn matches_tag(&self, file: &File) -> bool {
        match self.tag {
            TagFilter::All => true,
            TagFilter::Tag(id) => file.has_tag(id),
        }
    }

    fn matches_type(&self, file: &File) -> bool {
        match self.file_type {
            TypeFilter::All => true,
            TypeFilter::Type(t) => file.file_type == t,
        }
    }
}

/// The files visible for `selected` under `filter`.
///
/// With no folder selected the list is empty; subfolder contents are never
/// included.
pub fn folder_files<'a>(
    files: &'a FileRegistry,
    tags: &TagRegistry,
    selected: Option<FolderId>,
    filter: &FileFilter,
) -> Vec<&'a File> {
    let Some(folder_id) = selected else {
        return Vec::new();
    };
    files
        .in_folder(folder_id)
        .filter(|file| filter.matches(file, tags))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use propdocs_entity::file::RawUpload;
    use propdocs_entity::tag::TagColor;

    struct Fixture {
        files: FileRegistry,
        tags: TagRegistry,
        folder: FolderId,
        lease_tag: TagId,
    }

    fn fixture() -> Fixture {
        let mut tags = TagRegistry::new();
        let lease_tag = tags.add_tag_with_color("Signed", TagColor::Blue).unwrap().id;
        let mut files = FileRegistry::new();
        let folder = FolderId::new();
        files.upload_files(
            vec![RawUpload::new("Lease.pdf", 10, "application/pdf")],
            folder,
            &[lease_tag],
        );
        files.upload_files(vec![RawUpload::new("Photo.jpg", 10, "image/jpeg")], folder, &[]);
        Fixture {
            files,
            tags,
            folder,
            lease_tag,
        }
    }

    fn names(files: Vec<&File>) -> Vec<&str> {
        files.into_iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_no_selection_is_empty() {
        let fx = fixture();
        assert!(folder_files(&fx.files, &fx.tags, None, &FileFilter::default()).is_empty());
    }

    #[test]
    fn test_filter_composition() {
        let fx = fixture();
        let mut filter = FileFilter {
            search: "lease".to_string(),
            ..FileFilter::default()
        };
        assert_eq!(
            names(folder_files(&fx.files, &fx.tags, Some(fx.folder), &filter)),
            vec!["Lease.pdf"]
        );

        filter.tag = TagFilter::Tag(fx.lease_tag);
        assert_eq!(
            names(folder_files(&fx.files, &fx.tags, Some(fx.folder), &filter)),
            vec!["Lease.pdf"]
        );

        filter.file_type = TypeFilter::Type(FileType::Image);
        assert!(folder_files(&fx.files, &fx.tags, Some(fx.folder), &filter).is_empty());
    }

    #[test]
    fn test_search_matches_tag_names() {
        let fx = fixture();
        let filter = FileFilter {
            search: "SIGN".to_string(),
            ..FileFilter::default()
        };
        assert_eq!(
            names(folder_files(&fx.files, &fx.tags, Some(fx.folder), &filter)),
            vec!["Lease.pdf"]
        );
    }

    #[test]
    fn test_search_folds_non_ascii_case() {
        let mut fx = fixture();
        fx.files.upload_files(vec![RawUpload::new("élan notes.pdf", 1, "application/pdf")], fx.folder, &[]);
        let filter = FileFilter {
            search: "ÉLAN".to_string(),
            ..FileFilter::default()
        };
        assert_eq!(
            names(folder_files(&fx.files, &fx.tags, Some(fx.folder), &filter)),
            vec!["élan notes.pdf"]
        );
    }

    #[test]
    fn test_other_folder_excluded() {
        let fx = fixture();
        let other = FolderId::new();
        assert!(folder_files(&fx.files, &fx.tags, Some(other), &FileFilter::default()).is_empty());
        assert!(FileFilter::default().is_empty());
    }
}
