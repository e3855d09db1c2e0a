//! # propdocs-entity
//!
//! Domain entity models for PropDocs. Every struct in this crate is either
//! a stored record (folder, file, tag) or a value object attached to one.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod file;
pub mod folder;
pub mod tag;
