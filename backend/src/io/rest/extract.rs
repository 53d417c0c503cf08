//! Extractors that report their rejections through `ApiError`, so malformed
//! bodies and query strings get the same JSON error body as everything else.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use super::error::ApiError;

/// `axum::Json` with an `ApiError` rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with an `ApiError` rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Query string of the DELETE endpoints (`?id=...`)
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: String,
}
