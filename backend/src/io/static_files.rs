//! Serving of the prebuilt frontend bundle.
//!
//! `/assets/*` maps onto `<static_dir>/assets`; every other path that no API
//! route claims gets `<static_dir>/index.html` so client-side routing works.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_FILE: &str = "index.html";
pub const ASSETS_DIR: &str = "assets";

pub fn assets_service(static_dir: &Path) -> ServeDir {
    ServeDir::new(static_dir.join(ASSETS_DIR))
}

pub fn spa_fallback(static_dir: &Path) -> ServeFile {
    ServeFile::new(static_dir.join(INDEX_FILE))
}
