//! Order submission handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use vitrine_core::{OrderDraft, build_order};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Accept an order: validate, total, stamp, record, 201.
///
/// A malformed body is collapsed to the generic server error per the API
/// contract rather than surfacing deserialization details.
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<OrderDraft>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(draft) =
        payload.map_err(|e| ApiError::Internal(format!("malformed order body: {e}")))?;

    let catalog = state.catalog().current().await?;
    let order = build_order(&catalog, draft)?;
    state.orders().record(order.clone()).await?;

    tracing::info!(order_id = %order.id, total = %order.total_price, "order accepted");

    let location = format!("api/order/{}", order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order),
    ))
}
