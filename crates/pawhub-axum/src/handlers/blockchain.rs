//! Blockchain ledger handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use pawhub_core::{BlockchainRecord, BlockchainRequest};
use serde::Serialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Response body for a verification check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub order_id: i64,
    pub verified: bool,
}

/// Hash and store a payload for an order.
/// POST /api/blockchain/records
pub async fn record(
    State(state): State<AppState>,
    Json(req): Json<BlockchainRequest>,
) -> Result<(StatusCode, Json<BlockchainRecord>), HttpError> {
    let record = state.core.blockchain().record(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// All records of an order.
/// GET /api/blockchain/records/order/{order_id}
pub async fn by_order(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<Json<Vec<BlockchainRecord>>, HttpError> {
    let records = state.core.blockchain().records_for_order(order_id).await?;
    Ok(Json(records))
}

/// Check a payload against the stored hashes of an order.
/// POST /api/blockchain/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<BlockchainRequest>,
) -> Result<Json<VerifyResponse>, HttpError> {
    let verified = state
        .core
        .blockchain()
        .verify(req.order_id, req.record_type, &req.data_to_verify)
        .await?;

    Ok(Json(VerifyResponse {
        order_id: req.order_id,
        verified,
    }))
}
