//! # propdocs-store
//!
//! In-memory stores backing a document-management session: the folder
//! tree, the file registry, and the tag registry. Stores are plain owned
//! values; the service layer holds them and is the only writer.

pub mod file;
pub mod folder;
pub mod seed;
pub mod tag;

pub use file::{FileRegistry, Restored};
pub use folder::FolderStore;
pub use tag::TagRegistry;

/// Case folding applied to every name comparison: folder and tag uniqueness,
/// path lookups, and search.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Whether two names are equal under [`fold_name`].
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || fold_name(a) == fold_name(b)
}

/// The three stores of one session, bundled for construction and seeding.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Folder hierarchy.
    pub folders: FolderStore,
    /// File records.
    pub files: FileRegistry,
    /// Tags.
    pub tags: TagRegistry,
}

impl DocumentStore {
    /// An empty session: system roots only, no files or tags.
    pub fn new() -> Self {
        Self {
            folders: FolderStore::with_system_roots(),
            files: FileRegistry::new(),
            tags: TagRegistry::new(),
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_folds_non_ascii() {
        assert!(same_name("Élan", "élan"));
        assert!(same_name("LEASES", "leases"));
        assert!(!same_name("Lease", "Leases"));
    }
}
