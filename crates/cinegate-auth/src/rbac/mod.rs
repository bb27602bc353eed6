//! Role-based access control for routes.

pub mod gate;

pub use gate::{INSUFFICIENT_PERMISSIONS, RequiredRoles, RoleGate};
