use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API; the admin panel and public pages are often
/// served from a different host during development.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
