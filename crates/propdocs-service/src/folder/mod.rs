//! Folder workflows and tree rendering.

pub mod service;
pub mod tree;

pub use service::FolderDeletion;
pub use tree::{TreeRow, TreeView};
