//! In-memory folder tree store.
//!
//! Folders are kept in a flat, insertion-ordered list. Parent/child
//! relationships are answered by linear scans over `parent_id`; there is no
//! cached child index. Paths are derived from the live parent chain, so a
//! rename is reflected in every descendant path immediately.

use tracing::debug;

use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::types::FolderId;
use propdocs_entity::folder::{Folder, SystemFolder};

use crate::same_name;

/// Separator used when joining ancestor names into a path.
pub const PATH_SEPARATOR: &str = "/";

/// Flat collection of folders with tree queries.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    /// All folders in insertion order.
    folders: Vec<Folder>,
}

impl FolderStore {
    /// Creates an empty store without system roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the four protected system roots.
    pub fn with_system_roots() -> Self {
        Self {
            folders: SystemFolder::ALL.into_iter().map(Folder::system).collect(),
        }
    }

    /// Finds a folder by ID.
    pub fn get(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }

    /// Finds a folder by ID or returns a not-found error.
    pub fn require(&self, id: FolderId) -> AppResult<&Folder> {
        self.get(id)
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// Whether a folder with this ID exists.
    pub fn contains(&self, id: FolderId) -> bool {
        self.get(id).is_some()
    }

    /// All folders in insertion order.
    pub fn all(&self) -> &[Folder] {
        &self.folders
    }

    /// Number of folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Looks up one of the system roots.
    pub fn system_folder(&self, kind: SystemFolder) -> Option<&Folder> {
        self.folders.iter().find(|f| f.system == Some(kind))
    }

    /// ID of the trash folder.
    pub fn trash_id(&self) -> AppResult<FolderId> {
        self.system_folder(SystemFolder::Trash)
            .map(|f| f.id)
            .ok_or_else(|| AppError::internal("Trash folder is missing from the store"))
    }

    /// Direct children of `parent` (roots when `None`), in insertion order.
    pub fn get_children(&self, parent: Option<FolderId>) -> Vec<&Folder> {
        self.folders
            .iter()
            .filter(|f| f.parent_id == parent)
            .collect()
    }

    /// Whether the folder has at least one child.
    pub fn has_children(&self, id: FolderId) -> bool {
        self.folders.iter().any(|f| f.parent_id == Some(id))
    }

    /// Ancestor chain from the root down to and including `id`.
    ///
    /// A missing target yields an empty chain. A parent link that points at
    /// a folder which no longer exists ends the walk, so an orphaned chain
    /// starts at the first folder that still exists.
    pub fn get_breadcrumb(&self, id: FolderId) -> Vec<&Folder> {
        let mut chain = Vec::new();
        let mut cursor = self.get(id);

        while let Some(folder) = cursor {
            // A parent cycle can only come from a corrupted store; stop rather than spin.
            if chain.len() >= self.folders.len() {
                debug!(folder_id = %id, "Parent cycle detected while building breadcrumb");
                break;
            }
            chain.push(folder);
            cursor = folder.parent_id.and_then(|parent| self.get(parent));
        }

        chain.reverse();
        chain
    }

    /// The `/`-joined names from the root down to `id`.
    pub fn path(&self, id: FolderId) -> Option<String> {
        let chain = self.get_breadcrumb(id);
        if chain.is_empty() {
            return None;
        }
        Some(
            chain
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(PATH_SEPARATOR),
        )
    }

    /// Finds the folder whose derived path equals `path` (case-insensitive).
    ///
    /// Derived paths are unique: user names cannot contain the separator and
    /// create/rename reject a path that another folder already has.
    pub fn find_by_path(&self, path: &str) -> Option<&Folder> {
        let wanted = path.trim().trim_matches('/');
        self.folders
            .iter()
            .find(|f| self.path(f.id).is_some_and(|p| same_name(&p, wanted)))
    }

    /// Creates a folder under `parent_id` (a root when `None`) and appends it.
    pub fn create_folder(&mut self, name: &str, parent_id: Option<FolderId>) -> AppResult<Folder> {
        let name = validate_name(name)?;

        if let Some(parent_id) = parent_id {
            let parent = self.require(parent_id)?;
            if parent.is_trash() {
                return Err(AppError::validation("Folders cannot be created inside Trash"));
            }
        }
        self.ensure_unique_sibling(parent_id, name, None)?;
        self.ensure_free_paths(parent_id, name, None)?;

        let folder = Folder::new(name, parent_id);
        self.folders.push(folder.clone());
        Ok(folder)
    }

    /// Appends a prebuilt folder (used when loading seed data).
    pub fn insert(&mut self, folder: Folder) -> AppResult<()> {
        if self.contains(folder.id) {
            return Err(AppError::conflict(format!(
                "Folder {} already exists",
                folder.id
            )));
        }
        if let Some(parent_id) = folder.parent_id {
            self.require(parent_id)?;
        }
        validate_name(&folder.name)?;
        self.ensure_unique_sibling(folder.parent_id, &folder.name, None)?;
        self.ensure_free_paths(folder.parent_id, &folder.name, None)?;
        self.folders.push(folder);
        Ok(())
    }

    /// Renames a folder in place. Returns the previous name.
    pub fn rename_folder(&mut self, id: FolderId, new_name: &str) -> AppResult<String> {
        let new_name = validate_name(new_name)?;
        let folder = self.require(id)?;
        if !folder.is_mutable() {
            return Err(AppError::forbidden(format!(
                "'{}' is a protected folder and cannot be renamed",
                folder.name
            )));
        }
        let parent_id = folder.parent_id;
        self.ensure_unique_sibling(parent_id, new_name, Some(id))?;
        self.ensure_free_paths(parent_id, new_name, Some(id))?;

        let folder = self
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
        Ok(std::mem::replace(&mut folder.name, new_name.to_string()))
    }

    /// `id` followed by all of its descendants, depth-first.
    ///
    /// Returns an empty list when `id` does not exist.
    pub fn descendant_ids(&self, id: FolderId) -> Vec<FolderId> {
        if !self.contains(id) {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if result.contains(&current) {
                continue;
            }
            result.push(current);
            // Reverse so children are visited in insertion order.
            let children: Vec<FolderId> = self
                .get_children(Some(current))
                .iter()
                .map(|f| f.id)
                .collect();
            stack.extend(children.into_iter().rev());
        }
        result
    }

    /// Removes `id` and every descendant. Returns the removed IDs.
    pub fn remove_subtree(&mut self, id: FolderId) -> AppResult<Vec<FolderId>> {
        let folder = self.require(id)?;
        if !folder.is_mutable() {
            return Err(AppError::forbidden(format!(
                "'{}' is a protected folder and cannot be deleted",
                folder.name
            )));
        }

        let removed = self.descendant_ids(id);
        if let Some(protected) = removed
            .iter()
            .filter_map(|fid| self.get(*fid))
            .find(|f| !f.is_mutable())
        {
            return Err(AppError::forbidden(format!(
                "Folder contains protected folder '{}'",
                protected.name
            )));
        }

        self.folders.retain(|f| !removed.contains(&f.id));
        Ok(removed)
    }

    fn ensure_unique_sibling(
        &self,
        parent_id: Option<FolderId>,
        name: &str,
        exclude: Option<FolderId>,
    ) -> AppResult<()> {
        let clash = self
            .get_children(parent_id)
            .into_iter()
            .any(|f| Some(f.id) != exclude && same_name(&f.name, name));
        if clash {
            return Err(AppError::conflict(format!(
                "A folder named '{name}' already exists here"
            )));
        }
        Ok(())
    }

    /// Rejects a create (`moved == None`) or rename of `moved` when any path
    /// the named folder or its descendants would end up with is already
    /// derived by a folder outside that subtree.
    fn ensure_free_paths(
        &self,
        parent_id: Option<FolderId>,
        name: &str,
        moved: Option<FolderId>,
    ) -> AppResult<()> {
        let prefix = match parent_id {
            Some(parent_id) => {
                let parent_path = self
                    .path(parent_id)
                    .ok_or_else(|| AppError::not_found(format!("Folder {parent_id} not found")))?;
                format!("{parent_path}{PATH_SEPARATOR}{name}")
            }
            None => name.to_string(),
        };

        let subtree = moved.map(|id| self.descendant_ids(id)).unwrap_or_default();
        let mut new_paths = vec![prefix.clone()];
        if let Some(old_prefix) = moved.and_then(|id| self.path(id)) {
            new_paths.extend(subtree.iter().skip(1).filter_map(|id| {
                self.path(*id)
                    .and_then(|p| p.strip_prefix(old_prefix.as_str()).map(|rest| format!("{prefix}{rest}")))
            }));
        }

        let taken = self
            .folders
            .iter()
            .filter(|f| !subtree.contains(&f.id))
            .filter_map(|f| self.path(f.id))
            .find(|existing| new_paths.iter().any(|p| same_name(p, existing)));
        if let Some(existing) = taken {
            debug!(path = %existing, "Rejected folder with a duplicate path");
            return Err(AppError::conflict(format!(
                "Another folder already has the path '{existing}'"
            )));
        }
        Ok(())
    }
}

/// Trims a folder name and rejects blank input or the path separator.
///
/// Only system roots (built directly, never validated) carry a `/`.
fn validate_name(name: &str) -> AppResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Folder name cannot be empty"));
    }
    if trimmed.contains(PATH_SEPARATOR) {
        return Err(AppError::validation(format!(
            "Folder name '{trimmed}' cannot contain '{PATH_SEPARATOR}'"
        )));
    }
    Ok(trimmed)
}
