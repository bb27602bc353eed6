//! # cinegate-cache
//!
//! Backends for the per-user token version counter. Supports three modes:
//!
//! - **memory**: process-local `DashMap`, for single-instance deployments and tests
//! - **redis**: shared counter via `INCR`, for multi-instance deployments
//! - **database**: the `users.token_version` column (see `cinegate-database`)
//!
//! The backend is selected at runtime based on configuration.

pub mod keys;
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use memory::MemoryTokenVersionStore;
pub use provider::TokenStoreManager;
