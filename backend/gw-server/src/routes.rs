use crate::api::{query, services, submit};
use crate::{AppState, health};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.body_limit_bytes;

    Router::new()
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        .route(
            "/api/upload/create-presigned",
            post(submit::create_presigned),
        )
        .route("/get/create-presigned/GetRegistry", get(query::get_registry))
        .route("/api/query/{service}/{method}", post(query::query))
        .route("/api/services", get(services::list_services))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
