//! HTTP route handlers for the catalog/order API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/goods        - Filtered/paginated product listing
//! GET  /api/goods/{id}   - Product detail (404 if absent)
//! GET  /api/categories   - Category reference list
//! GET  /api/category     - Alias kept for older clients
//! GET  /api/colors       - Color reference list
//! POST /api/order        - Submit an order (201 + Location header)
//! ```
//!
//! Everything else answers 404 with `{"message": "Not Found"}` via
//! [`not_found`].

pub mod goods;
pub mod orders;
pub mod reference;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    Router,
    routing::{get, post},
};
use serde_json::json;

use crate::state::AppState;

/// Create the goods routes router.
pub fn goods_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(goods::index))
        .route("/{id}", get(goods::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/goods", goods_routes())
        .route("/api/categories", get(reference::categories))
        .route("/api/category", get(reference::categories))
        .route("/api/colors", get(reference::colors))
        .nest("/api/order", order_routes())
}

/// JSON 404 for unrecognized paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}
