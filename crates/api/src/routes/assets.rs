use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Static site assets: `/admin` serves the admin panel page and every other
/// unmatched path falls through to the asset directory.
pub fn routes(dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/admin", ServeFile::new(dir.join("admin.html")))
        .fallback_service(ServeDir::new(dir))
}
