//! Core type definitions used across the PropDocs workspace.

pub mod id;

pub use id::*;
