//! # cinegate-api
//!
//! HTTP API layer for CineGate built on Axum.
//!
//! Provides the auth endpoints, the demo resource routes, the role gate
//! middleware, request logging, CORS, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
