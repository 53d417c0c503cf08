//! Router fixtures shared by the API and static file tests.

use std::error::Error;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::{create_router, initialize_backend};

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";
pub const APP_JS: &str = "console.log('wealth tracker');";

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// A router over fresh in-memory storage and a temporary frontend bundle
pub struct TestApp {
    pub router: Router,
    // Kept alive for the lifetime of the router
    _static_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> TestResult<Self> {
        Self::with_cors(None).await
    }

    pub async fn with_cors(cors_allow_origin: Option<&str>) -> TestResult<Self> {
        let static_dir = tempfile::tempdir()?;
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)?;
        std::fs::create_dir(static_dir.path().join("assets"))?;
        std::fs::write(static_dir.path().join("assets").join("app.js"), APP_JS)?;

        // Unique shared-cache name so tests running in parallel never share data
        let database_url = format!("file:memdb_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
        let static_path = static_dir.path().display().to_string();
        let config = AppConfig::from_lookup(|key| match key {
            "MONGODB_URL" => Some(database_url.clone()),
            "HOST" => Some("127.0.0.1".to_string()),
            "STATIC_DIR" => Some(static_path.clone()),
            "CORS_ALLOW_ORIGIN" => cors_allow_origin.map(str::to_string),
            _ => None,
        })?;

        let app_state = initialize_backend(&config).await?;
        let router = create_router(app_state, &config);

        Ok(Self {
            router,
            _static_dir: static_dir,
        })
    }

    /// Send a request and return the status and body as text
    pub async fn fetch_text(&self, method: Method, uri: &str) -> TestResult<(StatusCode, String)> {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty())?)
            .await?;

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(bytes.to_vec())?))
    }

    pub async fn get_headers(&self, uri: &str) -> TestResult<HeaderMap> {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().method(Method::GET).uri(uri).body(Body::empty())?)
            .await?;

        Ok(response.headers().clone())
    }

    /// POST a raw JSON-typed body without serializing it first
    pub async fn raw_post(&self, uri: &str, body: &str) -> TestResult<StatusCode> {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))?,
            )
            .await?;

        Ok(response.status())
    }
}

/// Send an optional JSON body and parse the JSON response (`Null` when empty)
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> TestResult<(StatusCode, Value)> {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => Request::builder().method(method).uri(uri).body(Body::empty())?,
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}
