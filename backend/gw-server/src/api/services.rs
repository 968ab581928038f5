use crate::AppState;

use axum::{Json, extract::State};
use serde_json::{Map, Value, json};

/// GET /api/services - query catalog and registered message types
pub async fn list_services(State(state): State<AppState>) -> Json<Value> {
    let services: Map<String, Value> = state
        .queries
        .catalog()
        .services()
        .map(|descriptor| {
            (
                descriptor.name.to_string(),
                json!(descriptor.method_names()),
            )
        })
        .collect();

    let mut message_types = state.registry.type_urls();
    message_types.sort_unstable();

    Json(json!({
        "status": "success",
        "data": {
            "services": services,
            "messageTypes": message_types,
        }
    }))
}
