//! Folder domain entities.

pub mod model;

pub use model::{AssociatedEntity, EntityKind, Folder, SystemFolder};
