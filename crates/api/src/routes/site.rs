use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use booth_core::{Collection, MapCollection, SiteDocument};
use serde_json::Value;

use super::success;
use crate::error::ApiResult;
use crate::state::AppState;

/// Whole-document and mapping-collection routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/site", get(get_site).put(put_site))
        .route("/api/socials", get(get_socials).put(put_socials))
}

async fn get_data(State(state): State<AppState>) -> ApiResult<Json<SiteDocument>> {
    Ok(Json(state.store().load().await?))
}

async fn get_site(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.store().get_collection(Collection::Site).await?))
}

async fn put_site(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    merge(&state, MapCollection::Site, body).await
}

async fn get_socials(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.store().get_collection(Collection::Socials).await?))
}

async fn put_socials(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    merge(&state, MapCollection::Socials, body).await
}

async fn merge(
    state: &AppState,
    collection: MapCollection,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(patch) = body?;
    let merged = state.store().update_map(collection, &patch).await?;
    success(collection.name(), &merged)
}
