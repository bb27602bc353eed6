//! # cinegate-database
//!
//! PostgreSQL connection management, migrations, and the credential store
//! implementations (PostgreSQL and in-memory) behind [`UserStore`].

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::UserStore;
