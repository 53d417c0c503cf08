//! # REST API for Transactions
//!
//! Endpoints for listing, saving and deleting transactions.

use axum::{extract::State, Json};
use shared::{StatusResponse, Transaction};
use tracing::info;

use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery, IdQuery};
use crate::AppState;

/// List up to 1000 transactions
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    info!("GET /api/transactions");

    let transactions = state.transaction_service.list_transactions().await?;
    Ok(Json(transactions))
}

/// Insert or fully replace a transaction by id
pub async fn save_transaction(
    State(state): State<AppState>,
    ApiJson(transaction): ApiJson<Transaction>,
) -> Result<Json<StatusResponse>, ApiError> {
    info!("POST /api/transactions - id: {}", transaction.id);

    state.transaction_service.save_transaction(&transaction).await?;
    Ok(Json(StatusResponse::success()))
}

/// Delete a transaction by id; unknown ids succeed
pub async fn delete_transaction(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    info!("DELETE /api/transactions - id: {}", query.id);

    state.transaction_service.delete_transaction(&query.id).await?;
    Ok(Json(StatusResponse::success()))
}
