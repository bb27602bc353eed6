//! # cinegate-entity
//!
//! Domain entity models for CineGate. Database entities derive
//! `sqlx::FromRow` in addition to `Serialize`/`Deserialize`.

pub mod user;
