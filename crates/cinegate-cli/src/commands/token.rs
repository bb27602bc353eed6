//! Token version inspection and forced revocation.

use clap::{Args, Subcommand};

use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;
use cinegate_database::repositories::UserStore;

use crate::output;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Show a user's current token version
    Show {
        /// Login email
        email: String,
    },
    /// Revoke every token issued to a user
    Revoke {
        /// Login email
        email: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute token commands
pub async fn execute(args: &TokenArgs, config: AppConfig) -> Result<(), AppError> {
    let state = super::connect(config).await?;

    let email = match &args.command {
        TokenCommand::Show { email } | TokenCommand::Revoke { email, .. } => email,
    };
    let user = state
        .auth
        .users()
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{email}' not found")))?;

    match &args.command {
        TokenCommand::Show { .. } => {
            let version = state.auth.current_version(user.id).await?;
            output::field("User", &user.email);
            output::field("Token version", &version.to_string());
        }
        TokenCommand::Revoke { force, .. } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Revoke all tokens for '{}'?", user.email))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    output::caution("Cancelled");
                    return Ok(());
                }
            }

            let version = state.auth.logout(user.id).await?;
            output::done(&format!(
                "Tokens for '{}' revoked (version is now {version})",
                user.email
            ));
        }
    }

    Ok(())
}
