//! HTTP surface: axum router construction and startup.

pub mod api;
pub mod state;

pub use state::AppState;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Build the full axum router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(|| async { "OK" }))
        .route("/generate-post", post(api::generate_post))
        .route("/chat", post(api::chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve `router` on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router).await?;
    Ok(())
}
