//! # Phrases Server
//!
//! Main entry point for the phrases microservice: loads configuration,
//! connects the database pool, wires repositories, services and the
//! users-service client, and serves the REST API until shutdown.

use phrases_config::ConfigLoader;
use phrases_core::{PhrasesError, PhrasesResult};
use phrases_repository::create_pool;
use phrases_rest::create_router;
use tokio::signal;
use tracing::{error, info};

mod app;
mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting phrases server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> PhrasesResult<()> {
    let config = ConfigLoader::from_default_location().load()?;

    info!("Environment: {}", config.app.environment);

    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    let state = app::build_state(db_pool, &config)?;
    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    startup::print_startup_info(&addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PhrasesError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PhrasesError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,phrases=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
