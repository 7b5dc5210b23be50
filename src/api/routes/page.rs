//! Page Routes
//!
//! - GET / - Dashboard page
//! - GET /api/v1/layout - Layout as JSON
//! - GET /api/v1/dataset - Dataset summary
//! - Anything else - 404 with the JSON error body

use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::DatasetResponse;
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::ui::Layout;

/// GET /
///
/// Serves the pre-rendered dashboard. Debug mode disables caching.
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let cache = if state.config.debug {
        "no-store"
    } else {
        "public, max-age=60"
    };

    (
        [(header::CACHE_CONTROL, cache)],
        Html(state.page.as_str().to_owned()),
    )
        .into_response()
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/dataset
pub async fn dataset(State(state): State<Arc<AppState>>) -> Json<DatasetResponse> {
    Json(DatasetResponse {
        records: state.table.len(),
        sites: state.table.sites().to_vec(),
        payload_bounds: state.table.payload_bounds(),
    })
}

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
