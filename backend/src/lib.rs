//! # Wealth Tracker Backend
//!
//! REST backend for a personal finance tracker. It keeps two document
//! collections, beneficiaries and transactions, and serves the prebuilt
//! single-page frontend.
//!
//! ## Architecture
//!
//! ```text
//! HTTP (axum router, static files)
//!     ↓
//! IO Layer (handlers, extractors, error mapping)
//!     ↓
//! Domain Layer (services, validation, listing caps)
//!     ↓
//! Storage Layer (StorageGateway → MongoDB or SQLite)
//! ```
//!
//! State is built once at startup and handed to handlers through axum's
//! `State` extractor.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{BeneficiaryService, TransactionService};
use crate::io::static_files;
use crate::storage::{StorageError, StorageGateway};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub beneficiary_service: BeneficiaryService,
    pub transaction_service: TransactionService,
}

impl AppState {
    pub fn new(storage: StorageGateway) -> Self {
        Self {
            beneficiary_service: BeneficiaryService::new(storage.clone()),
            transaction_service: TransactionService::new(storage),
        }
    }
}

/// Connect the storage gateway and build the services on top of it
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState, StorageError> {
    info!("Setting up storage gateway");
    let storage = StorageGateway::connect(&config.database_url, &config.database_name).await?;

    info!("Setting up application state");
    Ok(AppState::new(storage))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let api_routes = Router::new()
        .route(
            "/beneficiaries",
            get(io::list_beneficiaries)
                .post(io::save_beneficiary)
                .delete(io::delete_beneficiary),
        )
        .route(
            "/transactions",
            get(io::list_transactions)
                .post(io::save_transaction)
                .delete(io::delete_transaction),
        )
        .layer(middleware::map_response(io::no_store));

    let router = Router::new()
        .nest("/api", api_routes)
        .nest_service("/assets", static_files::assets_service(&config.static_dir))
        .fallback_service(static_files::spa_fallback(&config.static_dir))
        .with_state(app_state);

    match config.cors_allow_origin.as_deref() {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                info!("Allowing cross-origin requests from {:?}", origin);
                let cors = CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST, Method::DELETE])
                    .allow_headers(Any);
                router.layer(cors)
            }
            Err(_) => {
                warn!("Ignoring invalid CORS_ALLOW_ORIGIN value: {}", origin);
                router
            }
        },
        None => router,
    }
}
