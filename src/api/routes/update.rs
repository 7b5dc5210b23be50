//! Update Routes
//!
//! Stateless recomputation for clients that do not hold a WebSocket session.
//!
//! - POST /api/v1/update - Recompute the outputs a control change affects

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{OutputUpdate, UpdateRequest, UpdateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/update
///
/// Runs every callback triggered by `trigger` (all of them when absent)
/// against the supplied control values. Per-output failures are reported in
/// the response body; an inverted payload range is rejected with 400.
pub async fn update_outputs(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse>> {
    let Json(req) = payload?;
    let trigger = req.trigger;

    let selection = req
        .inputs
        .into_selection()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    tracing::debug!(
        trigger = ?trigger,
        site = %selection.site,
        low = selection.payload.low(),
        high = selection.payload.high(),
        "Stateless update"
    );

    let verbose = state.config.debug;
    let updates = state
        .registry
        .dispatch(&state.table, trigger, &selection)
        .into_iter()
        .map(|u| OutputUpdate::from_update(u, verbose))
        .collect();

    Ok(Json(UpdateResponse { updates }))
}
