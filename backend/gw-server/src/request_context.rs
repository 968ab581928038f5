use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header a caller may set to carry its own correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Per-request correlation for log lines
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: String,
    /// Sequence number within this server instance
    pub request_seq: u64,
    pub route: &'static str,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(route: &'static str, headers: &HeaderMap) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple()));

        Self {
            correlation_id,
            request_seq,
            route,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    pub fn log_prefix(&self) -> String {
        format!("[req={} route={}]", self.correlation_id, self.route)
    }
}
