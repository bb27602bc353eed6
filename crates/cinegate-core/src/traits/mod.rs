//! Core traits defined in `cinegate-core` and implemented by other crates.

pub mod token_version;

pub use token_version::TokenVersionStore;
