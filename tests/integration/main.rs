//! HTTP-level integration tests on in-memory stores.

mod auth_test;
mod helpers;
mod rbac_test;
