use axum::extract::DefaultBodyLimit;

/// Cap request bodies read by the JSON extractor at `max_bytes`.
///
/// An oversized body fails extraction with a 413 rejection, which handlers
/// render through `ApiError` like any other JSON error.
pub fn body_limit_layer(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}
