//! HTTP surface of the booth site: JSON CRUD routes over the site document,
//! health checks and optional static assets.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Router with every route group and the middleware stack applied.
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.config().max_body_bytes;

    routes::build_router(state)
        .layer(middleware::body_limit::body_limit_layer(max_body_bytes))
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer())
}
