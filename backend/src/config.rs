//! # Configuration
//!
//! Process configuration read once at startup from the environment. The
//! database connection string is mandatory; everything else has a default.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_NAME: &str = "wealth_tracker";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing MONGODB_URL environment variable")]
    MissingDatabaseUrl,
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid HOST value: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Connection string for the document store (`mongodb://...` or `sqlite:...`)
    pub database_url: String,
    pub database_name: String,
    pub bind_addr: SocketAddr,
    /// Root of the prebuilt frontend bundle (`index.html`, `assets/`)
    pub static_dir: PathBuf,
    pub cors_allow_origin: Option<String>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("MONGODB_URL")
            .or_else(|| get("MONGODB_URI"))
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            database_name: get("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            bind_addr: SocketAddr::new(ip, port),
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
            cors_allow_origin: get("CORS_ALLOW_ORIGIN"),
        })
    }
}
