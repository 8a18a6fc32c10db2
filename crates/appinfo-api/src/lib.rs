//! HTTP server for appinfo
//!
//! Routes:
//! - GET / : application details (name, description) as JSON
//! - GET /api/health : liveness check

pub mod routes;

use appinfo_config::Config;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Application state
///
/// The configuration is loaded once at startup and only read afterwards, so
/// handlers share it by cloning the state; no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::index::app_details;

    Router::new()
        .route("/", get(app_details))
        .route("/api/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Bind the configured address and serve requests until terminated
pub async fn start_server(config: Config) {
    let addr = config.listen_addr();
    let state = AppState { config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();
    log::info!("Starting appinfo server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Application details)");
    log::info!("  - /api/health (Health check)");

    match axum::serve(listener, router).await {
        Ok(_) => log::info!("Server stopped gracefully"),
        Err(e) => log::error!("Server error: {}", e),
    }
}

// ==================== Tests ====================
