//! File domain entities.

pub mod kind;
pub mod model;
pub mod size;

pub use kind::FileType;
pub use model::{File, FileStatus, RawUpload};
pub use size::format_size;
