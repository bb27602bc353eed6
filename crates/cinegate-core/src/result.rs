//! Convenience result type alias for CineGate.

use crate::error::AppError;

/// A specialized `Result` type for CineGate operations.
pub type AppResult<T> = Result<T, AppError>;
