//! Main application router.

use crate::{
    controllers::{
        author_controller, health_controller, image_controller, phrase_controller, type_controller,
    },
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use phrases_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// Resource routes are nested under `/api`; health endpoints stay at the
/// root so probes don't depend on the API prefix.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .merge(author_controller::router())
        .merge(phrase_controller::router())
        .merge(type_controller::router())
        .merge(image_controller::router())
        .with_state(state);

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/api", api_router)
        .route("/", get(root))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints under /api");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Phrases API"
}
