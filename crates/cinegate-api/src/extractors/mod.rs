//! Custom Axum extractors.

pub mod auth;
pub mod validated;

pub use auth::{AuthUser, RefreshUser};
pub use validated::ValidatedJson;
