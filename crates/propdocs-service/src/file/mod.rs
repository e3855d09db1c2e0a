//! File workflows: upload, soft delete and restore, edits, and search.

pub mod search;
pub mod service;
pub mod upload;

pub use search::{FileFilter, TagFilter, TypeFilter};
