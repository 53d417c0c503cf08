//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api`. Handlers parse the request into the shared
//! model types, call the domain services, and answer with JSON:
//!
//! - **GET /api/beneficiaries**, **GET /api/transactions**: capped listings
//! - **POST /api/beneficiaries**, **POST /api/transactions**: upsert by `id`
//! - **DELETE /api/beneficiaries?id=**, **DELETE /api/transactions?id=**: idempotent delete
//!
//! Mutations answer `{"status": "success"}`; failures answer `{"error": "..."}`
//! with a 4xx for bad input and a 500 for storage failures.

pub mod beneficiary_apis;
pub mod error;
pub mod extract;
pub mod transaction_apis;

pub use beneficiary_apis::*;
pub use error::ApiError;
pub use transaction_apis::*;

use axum::{
    http::{
        header::{CACHE_CONTROL, EXPIRES, PRAGMA},
        HeaderValue,
    },
    response::Response,
};

/// Mark an API response as uncacheable so the frontend always sees fresh lists
pub async fn no_store(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    response
}
