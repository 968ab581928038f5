use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "message": "Metrics recorder not installed" })),
        )
            .into_response(),
    }
}
