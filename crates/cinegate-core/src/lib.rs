//! # cinegate-core
//!
//! Core crate for CineGate. Contains configuration schemas, the shared
//! store traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CineGate crates.

pub mod config;
pub mod error;
#[cfg(feature = "axum")]
pub mod http;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
