pub mod assets;
pub mod health;
pub mod records;
pub mod site;

use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(health::routes())
        .merge(site::routes())
        .merge(records::routes());

    if let Some(dir) = &state.config().static_dir {
        router = router.merge(assets::routes(dir));
    }

    router.with_state(state)
}

/// `{"success": true, "<key>": <value>}`
pub(crate) fn success<S: Serialize>(key: &str, value: &S) -> ApiResult<Json<Value>> {
    let value = serde_json::to_value(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    body.insert(key.to_string(), value);
    Ok(Json(Value::Object(body)))
}
