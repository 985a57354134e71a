//! Category and color reference lookups. Read-only, no filtering.

use axum::Json;
use axum::extract::State;
use vitrine_core::{CategoryRef, ColorRef};

use crate::error::Result;
use crate::state::AppState;

/// The catalog's category reference list.
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryRef>>> {
    let catalog = state.catalog().current().await?;
    Ok(Json(catalog.categories.clone()))
}

/// The catalog's color reference list.
pub async fn colors(State(state): State<AppState>) -> Result<Json<Vec<ColorRef>>> {
    let catalog = state.catalog().current().await?;
    Ok(Json(catalog.colors.clone()))
}
