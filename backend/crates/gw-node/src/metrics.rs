use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics collector for broadcast and query traffic
#[derive(Debug, Clone)]
pub struct GatewayMetrics {
    prefix: &'static str,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self { prefix: "gw" }
    }

    /// Record a transaction handed to the node
    pub fn broadcast_submitted(&self) {
        counter!(format!("{}.broadcast.submitted", self.prefix)).increment(1);
    }

    /// Record a transaction the node accepted
    pub fn broadcast_accepted(&self) {
        counter!(format!("{}.broadcast.accepted", self.prefix)).increment(1);
    }

    /// Record a transaction the node rejected with a nonzero code
    pub fn broadcast_rejected(&self, code: u32) {
        counter!(format!("{}.broadcast.rejected", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.rejected.{}", self.prefix, code)).increment(1);
    }

    /// Record a broadcast that failed before the node gave a verdict
    pub fn broadcast_failed(&self, error_code: &str) {
        counter!(format!("{}.broadcast.failed", self.prefix)).increment(1);
        counter!(format!("{}.broadcast.failed.{}", self.prefix, error_code)).increment(1);
    }

    pub fn query_succeeded(&self, service: &str) {
        counter!(format!("{}.query.succeeded", self.prefix)).increment(1);
        counter!(format!("{}.query.succeeded.{}", self.prefix, service)).increment(1);
    }

    pub fn query_failed(&self, error_code: &str) {
        counter!(format!("{}.query.failed", self.prefix)).increment(1);
        counter!(format!("{}.query.failed.{}", self.prefix, error_code)).increment(1);
    }

    /// Record one candidate request sent by the dispatcher
    pub fn candidate_attempt(&self) {
        counter!(format!("{}.query.candidate_attempts", self.prefix)).increment(1);
    }

    /// Record round-trip latency of a single node call
    pub fn node_latency(&self, duration: Duration) {
        histogram!(format!("{}.node.latency_ms", self.prefix)).record(duration.as_millis() as f64);
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
