//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;
use cinegate_database::repositories::UserStore;
use cinegate_entity::user::Role;

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user; prompts for the password when not given
    Create {
        /// Login email
        email: String,
        /// Comma-separated roles (PUBLIC, STAFF, ADMIN)
        #[arg(short, long = "roles", value_delimiter = ',', default_value = "PUBLIC")]
        roles: Vec<Role>,
        /// Password (prompted interactively if omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    email: String,
    roles: String,
    token_version: i64,
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = super::connect(config).await?;

    match &args.command {
        UserCommand::Create {
            email,
            roles,
            password,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = state.auth.create_user(email, &password, roles.clone()).await?;
            output::done(&format!("User '{}' created", user.email));
            output::field("ID", &user.id.to_string());
        }
        UserCommand::List => {
            let users = state.auth.users().list().await?;

            let mut rows = Vec::with_capacity(users.len());
            for u in &users {
                rows.push(UserRow {
                    id: u.id.to_string(),
                    email: u.email.clone(),
                    roles: u
                        .roles
                        .iter()
                        .map(Role::as_str)
                        .collect::<Vec<_>>()
                        .join(","),
                    token_version: state.auth.current_version(u.id).await?,
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                });
            }

            output::rows(&rows, format)?;
        }
    }

    Ok(())
}
