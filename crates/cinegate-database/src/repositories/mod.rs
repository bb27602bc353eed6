//! Credential store trait and its implementations.

pub mod memory;
pub mod token_version;
pub mod user;

use async_trait::async_trait;
use uuid::Uuid;

use cinegate_core::result::AppResult;
use cinegate_entity::user::{CreateUser, User};

pub use memory::MemoryUserRepository;
pub use token_version::PgTokenVersionStore;
pub use user::PgUserRepository;

/// Message returned when a create collides with an existing email.
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// Persistence for user records consumed by the auth core.
///
/// Emails are compared case-insensitively by every implementation.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by login email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with `BadRequest` if the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Insert the user unless the email exists; an existing row is returned untouched.
    async fn upsert_by_email(&self, data: &CreateUser) -> AppResult<User>;

    /// All users, oldest first.
    async fn list(&self) -> AppResult<Vec<User>>;
}
