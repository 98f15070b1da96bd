use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, put},
    Json, Router,
};
use booth_core::{
    document::{Creatable, Record},
    Collection, Event, Mix, Service,
};
use serde_json::{json, Value};

use super::success;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// A record exposed over HTTP.
pub trait Entity: Record {
    /// Key of the record in a success envelope (`{"success": true, "event": ...}`).
    const KEY: &'static str;
    const COLLECTION: Collection;
}

impl Entity for Event {
    const KEY: &'static str = "event";
    const COLLECTION: Collection = Collection::Events;
}

impl Entity for Mix {
    const KEY: &'static str = "mix";
    const COLLECTION: Collection = Collection::Mixes;
}

impl Entity for Service {
    const KEY: &'static str = "service";
    const COLLECTION: Collection = Collection::Services;
}

/// Event, mix and service routes. Services cannot be created or deleted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list::<Event>).post(create::<Event>))
        .route("/api/events/{id}", put(update::<Event>).delete(remove::<Event>))
        .route("/api/mixes", get(list::<Mix>).post(create::<Mix>))
        .route("/api/mixes/{id}", put(update::<Mix>).delete(remove::<Mix>))
        .route("/api/services", get(list::<Service>))
        .route("/api/services/{id}", put(update::<Service>))
}

/// Path ids that are not integers match no record.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

async fn list<T: Entity>(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    Ok(Json(state.store().get_collection(T::COLLECTION).await?))
}

async fn create<T: Entity + Creatable>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(attributes) = body?;
    let item: T = state.store().create_item(&attributes).await?;
    success(T::KEY, &item)
}

async fn update<T: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(patch) = body?;
    let id = parse_id(&id).ok_or_else(|| ApiError::NotFound(format!("{} not found", T::KIND)))?;
    let item = state.store().update_item::<T>(id, &patch).await?;
    success(T::KEY, &item)
}

async fn remove<T: Entity + Creatable>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    if let Some(id) = parse_id(&id) {
        state.store().delete_item::<T>(id).await?;
    }
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("1714521600000"), Some(1_714_521_600_000));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("12abc"), None);
        assert_eq!(parse_id("+12"), Some(12));
        assert_eq!(parse_id(" 12 "), Some(12));
    }
}
