//! Goods route handlers: listing and detail lookup.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use vitrine_core::{DomainError, GoodsQuery, GoodsResult, Product, select_goods};

use crate::error::Result;
use crate::state::AppState;

/// List goods through the filter/pagination pipeline.
///
/// Parameters are taken as raw pairs so the allow-list check can see
/// unrecognized keys; which keys are accepted depends on the deployment's
/// validation mode.
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<GoodsResult>> {
    let Query(pairs) =
        query.map_err(|e| DomainError::InvalidParams(e.to_string()))?;
    let query = GoodsQuery::parse(&pairs, state.validation_mode())?;

    let catalog = state.catalog().current().await?;
    let result = select_goods(&catalog, &query)?;
    Ok(Json(result))
}

/// Single product by id.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let catalog = state.catalog().current().await?;
    let product = catalog.get(&id)?.clone();
    Ok(Json(product))
}
