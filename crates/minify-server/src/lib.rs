//! Minifier HTTP API server (Axum).
//!
//! Exposes the minification engine over JSON, plus a health endpoint.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use minify_core::ServerConfig;
use state::AppState;

/// Build the application router with the base profile.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::minify_routes())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(config.profile)?;
    let app = app_with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting minify server on {} with profile {}", addr, config.profile);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down..."),
        Err(err) => tracing::warn!("Failed to listen for Ctrl+C: {}", err),
    }
}

#[cfg(test)]
mod tests;
