//! Key builders for entries written to the shared store.
//!
//! The Redis client prepends the configured prefix.

use uuid::Uuid;

/// Key holding the token version of a user.
pub fn token_version(user_id: Uuid) -> String {
    format!("token_version:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_version_key() {
        let id = Uuid::nil();
        assert_eq!(
            token_version(id),
            "token_version:00000000-0000-0000-0000-000000000000"
        );
    }
}
