//! CLI command definitions and dispatch.

pub mod migrate;
pub mod seed;
pub mod serve;
pub mod token;
pub mod user;

use clap::{Parser, Subcommand};

use cinegate_api::AppState;
use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;

use crate::output::{self, OutputFormat};

/// CineGate: JWT authentication with role gating and token revocation
#[derive(Debug, Parser)]
#[command(name = "cinegate", version, about, long_about = None)]
pub struct Cli {
    /// Environment whose `config/{env}.toml` is layered over the defaults
    #[arg(short, long, env = "CINEGATE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the CineGate server
    Serve(serve::ServeArgs),
    /// Apply database migrations
    Migrate,
    /// Upsert the demo accounts
    Seed,
    /// User management
    User(user::UserArgs),
    /// Token version inspection and revocation
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(config).await,
            Commands::Seed => seed::execute(config).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Token(args) => token::execute(args, config).await,
        }
    }
}

/// Helper: connect the configured stores without seeding.
pub async fn connect(mut config: AppConfig) -> Result<AppState, AppError> {
    if !config.database.is_postgres() {
        output::caution(
            "database.provider is \"memory\"; changes are lost when this command exits",
        );
    }
    config.auth.seed_demo_users = false;
    cinegate_api::build_state(config).await
}
