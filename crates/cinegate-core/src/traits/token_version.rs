//! Storage trait behind the token version registry.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Shared per-user counter used to revoke issued tokens.
///
/// Implementations must make `bump` atomic per user id: two concurrent
/// bumps for the same user always yield two distinct, consecutive values.
#[async_trait]
pub trait TokenVersionStore: Send + Sync + std::fmt::Debug + 'static {
    /// Current version for the user, or `None` if never observed.
    async fn get(&self, user_id: Uuid) -> AppResult<Option<i64>>;

    /// Increment the version by exactly 1 (starting from 0) and return the new value.
    async fn increment(&self, user_id: Uuid) -> AppResult<i64>;

    /// Store `0` if the user has no version yet. Returns `true` if it was set.
    async fn init_if_absent(&self, user_id: Uuid) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
