//! Application builder: wires stores, auth, router, and middleware.

use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};
use tower_http::trace::TraceLayer;
use tracing::info;

use cinegate_auth::seed::seed_demo_users;
use cinegate_cache::TokenStoreManager;
use cinegate_core::config::AppConfig;
use cinegate_core::error::AppError;
use cinegate_core::traits::TokenVersionStore;
use cinegate_database::DatabasePool;
use cinegate_database::migration::run_migrations;
use cinegate_database::repositories::{MemoryUserRepository, PgUserRepository, UserStore};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connects the configured stores and assembles the application state.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let database = if config.database.is_postgres() {
        let pool = DatabasePool::connect(&config.database).await?;
        if config.database.auto_migrate {
            run_migrations(pool.pool()).await?;
        }
        Some(pool)
    } else {
        info!("Using in-memory credential store");
        None
    };

    let users: Arc<dyn UserStore> = match &database {
        Some(pool) => Arc::new(PgUserRepository::new(pool.pool().clone())),
        None => Arc::new(MemoryUserRepository::new()),
    };

    info!(provider = %config.token_store.provider, "Initializing token version store");
    let versions: Arc<dyn TokenVersionStore> =
        Arc::new(TokenStoreManager::new(&config.token_store, database.as_ref()).await?);

    let state = AppState::new(config, users, versions)?;

    if state.config.auth.seed_demo_users {
        let seeded = seed_demo_users(state.auth.users(), state.auth.hasher()).await?;
        info!(count = seeded, "Demo users seeded");
    }

    Ok(state)
}

/// Runs the CineGate server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(environment = %config.environment, "Starting CineGate server...");

    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "CineGate server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("CineGate server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
