//! The document manager façade.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use propdocs_core::config::{AppConfig, StoreConfig};
use propdocs_core::error::AppError;
use propdocs_core::result::AppResult;
use propdocs_core::traits::{Notification, Notifier};
use propdocs_core::types::{FolderId, TagId};
use propdocs_entity::file::File;
use propdocs_entity::folder::{Folder, SystemFolder};
use propdocs_store::{seed, DocumentStore, FileRegistry, FolderStore, TagRegistry};

use crate::file::search::folder_files;
use crate::file::{TagFilter, TypeFilter};
use crate::folder::{TreeRow, TreeView};
use crate::view::{ViewMode, ViewState};

/// Aggregate counters over the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of folders, system roots included.
    pub folders: usize,
    /// Number of file records, trashed ones included.
    pub files: usize,
    /// Files not in the trash.
    pub active_files: usize,
    /// Files in the trash.
    pub trashed_files: usize,
    /// Number of tags.
    pub tags: usize,
    /// Sum of all file sizes in bytes.
    pub total_bytes: u64,
}

/// Owns the stores and browsing state of one session.
///
/// Every mutation goes through a method on this type. Successful mutations
/// emit one notification through the injected [`Notifier`]; rejected ones
/// return an [`AppError`] and leave the state untouched.
#[derive(Debug)]
pub struct DocumentManager {
    /// Folder, file, and tag stores.
    pub(crate) store: DocumentStore,
    /// Selection, filters, and layout.
    pub(crate) view: ViewState,
    /// Tree expansion state.
    pub(crate) tree: TreeView,
    /// Store limits.
    pub(crate) config: StoreConfig,
    /// Feedback sink.
    notifier: Arc<dyn Notifier>,
}

impl DocumentManager {
    /// Creates a manager over an existing store.
    pub fn new(store: DocumentStore, config: StoreConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            view: ViewState::default(),
            tree: TreeView::new(),
            config,
            notifier,
        }
    }

    /// Creates a manager from application configuration, seeding the demo
    /// dataset when `store.seed_demo_data` is set.
    pub fn from_config(config: &AppConfig, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        let store = if config.store.seed_demo_data {
            seed::demo()?
        } else {
            DocumentStore::new()
        };
        info!(
            seeded = config.store.seed_demo_data,
            folders = store.folders.len(),
            files = store.files.len(),
            "Document manager initialized"
        );
        Ok(Self::new(store, config.store.clone(), notifier))
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The underlying stores.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Folder tree store.
    pub fn folders(&self) -> &FolderStore {
        &self.store.folders
    }

    /// File registry.
    pub fn files(&self) -> &FileRegistry {
        &self.store.files
    }

    /// Tag registry.
    pub fn tags(&self) -> &TagRegistry {
        &self.store.tags
    }

    /// Current browsing state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Tree expansion state.
    pub fn tree(&self) -> &TreeView {
        &self.tree
    }

    /// Store limits in effect.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Aggregate counters.
    pub fn stats(&self) -> StoreStats {
        let files = self.store.files.all();
        let trashed_files = files.iter().filter(|f| f.is_deleted()).count();
        StoreStats {
            folders: self.store.folders.len(),
            files: files.len(),
            active_files: files.len() - trashed_files,
            trashed_files,
            tags: self.store.tags.len(),
            total_bytes: files.iter().map(|f| f.size).sum(),
        }
    }

    // ── Derived views ────────────────────────────────────────────────

    /// Files in the selected folder that pass the active filters.
    pub fn folder_files(&self) -> Vec<&File> {
        folder_files(
            &self.store.files,
            &self.store.tags,
            self.view.selected_folder,
            &self.view.filter,
        )
    }

    /// Ancestor chain of the selected folder, root first.
    pub fn breadcrumb(&self) -> Vec<&Folder> {
        self.view
            .selected_folder
            .map(|id| self.store.folders.get_breadcrumb(id))
            .unwrap_or_default()
    }

    /// Derived path of a folder.
    pub fn folder_path(&self, id: FolderId) -> AppResult<String> {
        self.store
            .folders
            .path(id)
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// Direct children of `parent` (roots when `None`).
    pub fn children(&self, parent: Option<FolderId>) -> Vec<&Folder> {
        self.store.folders.get_children(parent)
    }

    /// Visible folder tree rows.
    pub fn tree_rows(&self) -> Vec<TreeRow> {
        self.tree.rows(&self.store.folders)
    }

    /// Every soft-deleted file.
    pub fn trash_files(&self) -> Vec<&File> {
        self.store.files.deleted().collect()
    }

    // ── Browsing state ───────────────────────────────────────────────

    /// Selects a folder (or clears the selection) and reveals it in the tree.
    pub fn select_folder(&mut self, id: Option<FolderId>) -> AppResult<()> {
        if let Some(id) = id {
            self.store.folders.require(id).inspect_err(|e| {
                debug!(folder_id = %id, error = %e, "Rejected folder selection");
            })?;
            self.tree.expand_to(&self.store.folders, id);
        }
        self.view.selected_folder = id;
        debug!(folder_id = ?id, "Selected folder");
        Ok(())
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.filter.search = search.into();
    }

    /// Sets the tag filter. The tag must exist.
    pub fn set_tag_filter(&mut self, filter: TagFilter) -> AppResult<()> {
        if let TagFilter::Tag(id) = filter {
            self.require_tag(id)?;
        }
        self.view.filter.tag = filter;
        Ok(())
    }

    /// Sets the file type filter.
    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.view.filter.file_type = filter;
    }

    /// Switches between grid and list layout.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
    }

    /// Clears search text and both filters.
    pub fn clear_filters(&mut self) {
        self.view.filter = Default::default();
    }

    // ── Tree expansion ───────────────────────────────────────────────

    /// Expands every ancestor of a folder so it is visible in the tree.
    pub fn expand_to(&mut self, id: FolderId) -> AppResult<()> {
        self.store.folders.require(id)?;
        self.tree.expand_to(&self.store.folders, id);
        Ok(())
    }

    /// Expands a folder in the tree.
    pub fn expand(&mut self, id: FolderId) -> AppResult<()> {
        self.store.folders.require(id)?;
        self.tree.expand(id);
        Ok(())
    }

    /// Collapses a folder in the tree.
    pub fn collapse(&mut self, id: FolderId) -> AppResult<()> {
        self.store.folders.require(id)?;
        self.tree.collapse(id);
        Ok(())
    }

    /// Flips a folder's expansion. Returns the new state.
    pub fn toggle(&mut self, id: FolderId) -> AppResult<bool> {
        self.store.folders.require(id)?;
        Ok(self.tree.toggle(id))
    }

    // ── Internal helpers ─────────────────────────────────────────────

    pub(crate) fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    pub(crate) fn trash_id(&self) -> AppResult<FolderId> {
        self.store.folders.trash_id()
    }

    /// Folder a restored file goes to when its original folder is gone.
    pub(crate) fn restore_fallback(&self) -> AppResult<FolderId> {
        self.store
            .folders
            .system_folder(SystemFolder::Shared)
            .map(|f| f.id)
            .ok_or_else(|| AppError::internal("Global/Shared folder is missing from the store"))
    }

    pub(crate) fn require_tag(&self, id: TagId) -> AppResult<()> {
        if self.store.tags.contains(id) {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Tag {id} not found")))
        }
    }

    pub(crate) fn require_tags(&self, ids: &[TagId]) -> AppResult<()> {
        match self.store.tags.first_unknown(ids) {
            Some(id) => Err(AppError::not_found(format!("Tag {id} not found"))),
            None => Ok(()),
        }
    }

    /// Name of a folder for messages, or its ID when it no longer exists.
    pub(crate) fn folder_label(&self, id: FolderId) -> String {
        self.store
            .folders
            .get(id)
            .map_or_else(|| id.to_string(), |f| f.name.clone())
    }
}
