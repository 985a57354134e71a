//! Vitrine server library.
//!
//! The binary in `main.rs` is a thin shell; everything it assembles lives
//! here so integration tests can drive the real router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application router.
///
/// CORS is wide open (`*`) and the layer answers OPTIONS preflights; images
/// are served straight off the filesystem under `/img`.
pub fn app(state: AppState) -> Router {
    let images_dir = state.config().images_dir.clone();

    Router::new()
        .route("/health", axum::routing::get(health))
        .merge(routes::routes())
        .nest_service("/img", ServeDir::new(images_dir))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
