//! Start the CineGate server.

use clap::Args;

use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Upsert the demo accounts on startup
    #[arg(long)]
    pub seed: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.seed {
        config.auth.seed_demo_users = true;
    }

    println!("Starting CineGate server...");
    output::field("Address", &config.server.bind_address());
    output::field("Token store", &config.token_store.provider);

    cinegate_api::run_server(config).await
}
