//! HTTP handlers for the add-on endpoints

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tomato_core::{CacheKeys, MetaEnvelope};
use tracing::{debug, warn};

use crate::AppState;
use crate::error::ApiError;
use crate::manifest::{MANIFEST, Manifest};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn manifest() -> Json<Manifest> {
    Json(MANIFEST)
}

/// Trailer lookup for `/meta/{media_type}/{media_id}`
///
/// Successful bodies are cached under the request path and query string;
/// a cached body is returned as is without touching any upstream.
/// Cache backend failures are logged and otherwise ignored.
pub async fn get_meta(
    State(state): State<AppState>,
    Path((media_type, media_id)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let key = CacheKeys::meta(uri.path(), uri.query());

    match state.cache.get(&key).await {
        Ok(Some(body)) => {
            debug!(key = %key, "Serving cached meta response");
            return Ok(json_body(body));
        }
        Ok(None) => {}
        Err(e) => warn!(key = %key, error = %e, "Cache read failed"),
    }

    let meta = state
        .pipeline
        .resolve_trailers(&media_type, &media_id)
        .await?;

    let body = serde_json::to_string(&MetaEnvelope::from(meta))
        .map_err(|e| ApiError::Internal(format!("Failed to serialize response: {e}")))?;

    if let Err(e) = state.cache.set(&key, &body).await {
        warn!(key = %key, error = %e, "Cache write failed");
    }

    Ok(json_body(body))
}

fn json_body(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
