use crate::api::error::{ApiError, Result as ApiResult};
use crate::{AppState, RequestContext};

use gw_node::REGISTRY_SERVICE;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
};
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};

/// Request shapes tried for `RegistryAll`, most specific first
pub fn registry_all_candidates() -> Vec<Value> {
    vec![
        json!({ "pagination": { "limit": "100", "countTotal": true } }),
        json!({ "pagination": {} }),
        json!({}),
    ]
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryBody {
    #[serde(default)]
    pub candidates: Option<Vec<Value>>,
    #[serde(default)]
    pub request: Option<Value>,
}

impl QueryBody {
    /// Empty body means one empty request
    pub fn parse(body: &[u8]) -> ApiResult<Vec<Value>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(vec![json!({})]);
        }

        let parsed: QueryBody = serde_json::from_slice(body)
            .map_err(|e| ApiError::bad_request(format!("Invalid request body: {e}")))?;

        match (parsed.candidates, parsed.request) {
            (Some(_), Some(_)) => Err(ApiError::bad_request(
                "Provide either candidates or request, not both",
            )),
            (Some(candidates), None) if candidates.is_empty() => {
                Err(ApiError::bad_request("candidates must not be empty"))
            }
            (Some(candidates), None) => Ok(candidates),
            (None, Some(request)) => Ok(vec![request]),
            (None, None) => Ok(vec![json!({})]),
        }
    }
}

fn success(data: Value) -> Json<Value> {
    Json(json!({ "status": "success", "data": data }))
}

/// GET /get/create-presigned/GetRegistry
pub async fn get_registry(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Value>> {
    let ctx = RequestContext::new("GetRegistry", &headers);
    let mut cancel = state.cancel.guard();

    let data = state
        .queries
        .query(
            REGISTRY_SERVICE,
            "RegistryAll",
            &registry_all_candidates(),
            &mut cancel,
        )
        .await?;

    info!("{} RegistryAll answered in {}ms", ctx.log_prefix(), ctx.elapsed_ms());
    Ok(success(data))
}

/// POST /api/query/{service}/{method}
pub async fn query(
    State(state): State<AppState>,
    Path((service, method)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let ctx = RequestContext::new("query", &headers);
    let candidates = QueryBody::parse(&body)?;

    info!(
        "{} {}/{} with {} candidate(s)",
        ctx.log_prefix(),
        service,
        method,
        candidates.len()
    );

    let mut cancel = state.cancel.guard();
    let data = state
        .queries
        .query(&service, &method, &candidates, &mut cancel)
        .await?;

    info!("{} answered in {}ms", ctx.log_prefix(), ctx.elapsed_ms());
    Ok(success(data))
}
