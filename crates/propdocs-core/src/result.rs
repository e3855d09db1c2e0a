//! Convenience result type alias for PropDocs.

use crate::error::AppError;

/// A specialized `Result` type for PropDocs operations.
pub type AppResult<T> = Result<T, AppError>;
