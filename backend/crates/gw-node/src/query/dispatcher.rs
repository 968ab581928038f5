use crate::connection::Release;
use crate::query::service::QueryService;
use crate::{CancelGuard, GatewayMetrics, NodeError, NodeResult};

use log::{debug, info, warn};
use serde_json::Value;

/// Invoke `method` on `service` with each candidate request in order and
/// return the first success.
///
/// - unknown `method`: `MethodNotFound` listing the service's methods
/// - every candidate failed: the error of the last candidate
/// - no candidates: `AllCandidatesFailed`
/// - cancellation: `Cancelled`, remaining candidates are skipped
///
/// `release` runs before this returns, whatever the outcome.
pub async fn dispatch<S>(
    service: &S,
    release: Release,
    method: &str,
    candidates: &[Value],
    cancel: &mut CancelGuard,
) -> NodeResult<Value>
where
    S: QueryService + ?Sized,
{
    let result = dispatch_inner(service, method, candidates, cancel).await;
    release.release();
    result
}

async fn dispatch_inner<S>(
    service: &S,
    method: &str,
    candidates: &[Value],
    cancel: &mut CancelGuard,
) -> NodeResult<Value>
where
    S: QueryService + ?Sized,
{
    let service_name = service.service_name();

    if !service.has_method(method) {
        let available = service
            .method_names()
            .into_iter()
            .map(String::from)
            .collect();
        return Err(NodeError::method_not_found(service_name, method, available));
    }

    let metrics = GatewayMetrics::new();
    let mut last_error = None;

    for (index, candidate) in candidates.iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(NodeError::cancelled());
        }

        metrics.candidate_attempt();
        let attempt = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(NodeError::cancelled()),
            result = service.invoke(method, candidate) => result,
        };

        match attempt {
            Ok(value) => {
                info!(
                    "{}/{} answered candidate {} of {}",
                    service_name,
                    method,
                    index + 1,
                    candidates.len()
                );
                return Ok(value);
            }
            Err(e) => {
                debug!(
                    "{}/{} candidate {} failed: {}",
                    service_name,
                    method,
                    index + 1,
                    e
                );
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => {
            warn!("{}/{} failed for every candidate", service_name, method);
            Err(e)
        }
        None => Err(NodeError::all_candidates_failed(method)),
    }
}
