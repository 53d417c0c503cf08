use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::DomainError;

/// Every way an API request can fail, mapped to a status code and an
/// `{"error": ...}` body
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Query(rejection) => rejection.body_text(),
            ApiError::Domain(err) => err.to_string(),
        };

        if status.is_server_error() {
            error!("Request failed: {}", message);
        } else {
            warn!("Request rejected ({}): {}", status, message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
