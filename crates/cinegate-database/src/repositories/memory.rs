//! In-process credential store for local development and tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use cinegate_core::error::AppError;
use cinegate_core::result::AppResult;
use cinegate_entity::user::{CreateUser, User};

use super::{USER_EXISTS_MESSAGE, UserStore};

/// Users keyed by lowercased email. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<String, User>>,
}

impl MemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn build(data: &CreateUser) -> User {
        let now = Utc::now();
        User {
            id: Uuid::now_v7(),
            email: data.email.to_lowercase(),
            password_hash: data.password_hash.clone(),
            roles: data.roles.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .get(&email.to_lowercase())
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| entry.value().clone()))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        match self.users.entry(data.email.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::bad_request(USER_EXISTS_MESSAGE)),
            Entry::Vacant(slot) => Ok(slot.insert(Self::build(data)).value().clone()),
        }
    }

    async fn upsert_by_email(&self, data: &CreateUser) -> AppResult<User> {
        let entry = self
            .users
            .entry(data.email.to_lowercase())
            .or_insert_with(|| Self::build(data));
        Ok(entry.value().clone())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinegate_core::error::ErrorKind;
    use cinegate_entity::user::Role;

    fn new_user(email: &str, roles: Vec<Role>) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            roles,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryUserRepository::new();
        let created = repo
            .create(&new_user("Staff@Example.com", vec![Role::Staff]))
            .await
            .unwrap();

        assert_eq!(created.email, "staff@example.com");
        let by_email = repo.find_by_email("STAFF@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);
        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.roles, vec![Role::Staff]);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_is_bad_request() {
        let repo = MemoryUserRepository::new();
        repo.create(&new_user("a@example.com", vec![Role::Public]))
            .await
            .unwrap();

        let err = repo
            .create(&new_user("A@example.com", vec![Role::Admin]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert_eq!(err.message, USER_EXISTS_MESSAGE);
    }

    #[tokio::test]
    async fn test_upsert_keeps_existing_row() {
        let repo = MemoryUserRepository::new();
        let first = repo
            .upsert_by_email(&new_user("admin@example.com", vec![Role::Admin]))
            .await
            .unwrap();
        let second = repo
            .upsert_by_email(&new_user("admin@example.com", vec![Role::Public]))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.roles, vec![Role::Admin]);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_admit_one() {
        let repo = MemoryUserRepository::new();
        let attempts = (0..8).map(|_| {
            let repo = repo.clone();
            async move { repo.create(&new_user("race@example.com", vec![Role::Public])).await }
        });

        let results = futures::future::join_all(attempts).await;
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    }
}
