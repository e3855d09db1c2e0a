//! # propdocs-service
//!
//! Service layer for PropDocs. [`DocumentManager`] owns the folder, file,
//! and tag stores of one session together with the browsing state (selected
//! folder, search text, filters, view mode, tree expansion) and is the only
//! component that mutates them.
//!
//! Dependencies are injected at construction time: the stores, the store
//! configuration, and an `Arc<dyn Notifier>` for user-facing feedback.

pub mod file;
pub mod folder;
pub mod manager;
pub mod notification;
pub mod tag;
pub mod view;

pub use file::{FileFilter, TagFilter, TypeFilter};
pub use folder::{FolderDeletion, TreeRow, TreeView};
pub use manager::{DocumentManager, StoreStats};
pub use notification::{LogNotifier, MemoryNotifier, NoopNotifier, NotificationFormatter};
pub use tag::TagDeletion;
pub use view::{ViewMode, ViewState};
