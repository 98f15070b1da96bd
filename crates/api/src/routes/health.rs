use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check: verifies the data file can be read and parsed.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let doc = state.store().load().await?;

    Ok(Json(json!({
        "status": "ok",
        "storage": "readable",
        "events": doc.events.len(),
        "mixes": doc.mixes.len(),
    })))
}

/// Lightweight ping with no storage access.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
