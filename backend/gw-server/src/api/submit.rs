use crate::api::error::{ApiError, Result as ApiResult};
use crate::{AppState, RequestContext};

use gw_core::{BroadcastOptions, protect_large_integers};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use log::info;
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_SERVICE: &str = "upload";
const DEFAULT_ACTION: &str = "create-presigned";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    pub signed_tx_hex: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

/// POST /api/upload/create-presigned
pub async fn create_presigned(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let ctx = RequestContext::new("create-presigned", &headers);
    let Json(request) = payload?;

    let signed_tx_hex = request
        .signed_tx_hex
        .as_deref()
        .map(str::trim)
        .filter(|hex| !hex.is_empty())
        .ok_or_else(|| ApiError::bad_request("signedTxHex is required"))?;

    let options = BroadcastOptions::new(
        request.service.unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
        request.action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
    );
    info!(
        "{} Broadcasting {} hex chars (service={}, action={})",
        ctx.log_prefix(),
        signed_tx_hex.len(),
        options.service,
        options.action
    );

    let mut cancel = state.cancel.guard();
    let result = state
        .broadcaster
        .broadcast(signed_tx_hex, &options, Some(&state.registry), &mut cancel)
        .await?;

    info!(
        "{} Broadcast accepted in {}ms",
        ctx.log_prefix(),
        ctx.elapsed_ms()
    );

    let body = serde_json::to_value(&result)
        .map_err(|e| ApiError::internal(format!("Failed to serialize broadcast result: {e}")))?;

    Ok(Json(protect_large_integers(body)))
}
