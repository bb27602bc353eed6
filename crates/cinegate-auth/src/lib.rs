//! # cinegate-auth
//!
//! Authentication and authorization core for CineGate.
//!
//! ## Modules
//!
//! - `jwt`: claim set, signing of token pairs, and signature/expiry checks
//! - `password`: Argon2id password hashing
//! - `version`: per-user token version registry (the revocation mechanism)
//! - `issuer`: builds a signed access/refresh pair for a user
//! - `verifier`: one verification routine for both token kinds
//! - `credentials`: email/password validation against the credential store
//! - `rbac`: role gate for route-level role requirements
//! - `service`: login, refresh, logout, and user creation flows
//! - `seed`: demo account bootstrap

pub mod credentials;
pub mod issuer;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod seed;
pub mod service;
pub mod verifier;
pub mod version;

pub use credentials::CredentialValidator;
pub use issuer::TokenIssuer;
pub use jwt::{JwtDecoder, JwtEncoder, JwtPayload, TokenKind, TokenPair};
pub use password::PasswordHasher;
pub use rbac::{RequiredRoles, RoleGate};
pub use service::AuthService;
pub use verifier::{TokenSource, TokenVerifier};
pub use version::TokenVersionRegistry;
