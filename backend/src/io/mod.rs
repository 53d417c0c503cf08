//! # IO Module
//!
//! Adapter layer between HTTP and the domain services.
//!
//! - **rest**: JSON endpoints under `/api`
//! - **static_files**: the frontend bundle and its SPA fallback

pub mod rest;
pub mod static_files;

pub use rest::*;
