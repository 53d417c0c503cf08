//! # REST API for Beneficiaries
//!
//! Endpoints for listing, saving and deleting beneficiaries.

use axum::{extract::State, Json};
use shared::{Beneficiary, StatusResponse};
use tracing::info;

use super::error::ApiError;
use super::extract::{ApiJson, ApiQuery, IdQuery};
use crate::AppState;

/// List up to 100 beneficiaries
pub async fn list_beneficiaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Beneficiary>>, ApiError> {
    info!("GET /api/beneficiaries");

    let beneficiaries = state.beneficiary_service.list_beneficiaries().await?;
    Ok(Json(beneficiaries))
}

/// Insert or fully replace a beneficiary by id
pub async fn save_beneficiary(
    State(state): State<AppState>,
    ApiJson(beneficiary): ApiJson<Beneficiary>,
) -> Result<Json<StatusResponse>, ApiError> {
    info!("POST /api/beneficiaries - id: {}", beneficiary.id);

    state.beneficiary_service.save_beneficiary(&beneficiary).await?;
    Ok(Json(StatusResponse::success()))
}

/// Delete a beneficiary by id; unknown ids succeed
pub async fn delete_beneficiary(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    info!("DELETE /api/beneficiaries - id: {}", query.id);

    state.beneficiary_service.delete_beneficiary(&query.id).await?;
    Ok(Json(StatusResponse::success()))
}
