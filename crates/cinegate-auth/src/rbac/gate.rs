//! Role gate: the principal must hold at least one of a route's roles.

use std::fmt;

use cinegate_core::error::AppError;
use cinegate_entity::user::Role;

/// Message for an authenticated principal without a required role.
pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// Roles declared by a route. Empty means any authenticated principal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredRoles(Vec<Role>);

impl RequiredRoles {
    /// Any authenticated principal is admitted.
    pub fn authenticated() -> Self {
        Self(Vec::new())
    }

    /// Principals holding at least one of `roles` are admitted.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut roles: Vec<Role> = roles.into_iter().collect();
        roles.sort_by_key(|r| r.as_str());
        roles.dedup();
        Self(roles)
    }

    /// The declared roles.
    pub fn roles(&self) -> &[Role] {
        &self.0
    }

    /// Whether no role is required.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RequiredRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<authenticated>");
        }
        let names: Vec<&str> = self.0.iter().map(|r| r.as_str()).collect();
        write!(f, "{}", names.join("|"))
    }
}

/// Stateless role check. There is no hierarchy: ADMIN does not imply STAFF.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleGate;

impl RoleGate {
    /// Creates a new gate.
    pub fn new() -> Self {
        Self
    }

    /// True iff the principal's roles intersect the required set, or the
    /// set is empty.
    pub fn allows(&self, principal: &[Role], required: &RequiredRoles) -> bool {
        required.is_empty() || required.roles().iter().any(|r| principal.contains(r))
    }

    /// Like [`allows`](Self::allows) but fails with `Forbidden`.
    pub fn require(&self, principal: &[Role], required: &RequiredRoles) -> Result<(), AppError> {
        if self.allows(principal, required) {
            Ok(())
        } else {
            Err(AppError::forbidden(INSUFFICIENT_PERMISSIONS))
        }
    }
}
