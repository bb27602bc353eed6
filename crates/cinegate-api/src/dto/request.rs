//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

