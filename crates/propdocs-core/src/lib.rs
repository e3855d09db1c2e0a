//! # propdocs-core
//!
//! Core crate for PropDocs. Contains the configuration schema, typed
//! identifiers, the notifier trait used for user-facing feedback, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other PropDocs crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
