//! # HTTP Routes
//!
//! ```text
//! POST /receipts/process      UnparsedReceipt ──► { "id": "..." }
//! GET  /receipts/{id}/points  ──► { "points": 28 }
//! GET  /receipts/{id}         ──► stored receipt + processedAt
//! GET  /health                ──► OK
//! ```

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use receipt_core::UnparsedReceipt;
use receipt_store::StoredReceipt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the route table over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/receipts/{id}", get(get_receipt))
        .route("/health", get(health_handler))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UnparsedReceipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(raw) = payload?;
    let processed = state.processor.process(&raw)?;
    Ok(Json(ProcessResponse { id: processed.id }))
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    debug!(receipt_id = %id, "Points lookup");
    let points = state.processor.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

async fn get_receipt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<StoredReceipt>> {
    Ok(Json(state.processor.receipt(&id)?))
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

// =============================================================================
// Unit Tests
// =============================================================================
