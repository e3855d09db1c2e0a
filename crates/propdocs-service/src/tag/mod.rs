//! Tag workflows.

pub mod service;

pub use service::TagDeletion;
