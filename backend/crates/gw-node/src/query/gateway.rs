use crate::connection::NodeConnector;
use crate::query::catalog::ServiceCatalog;
use crate::query::dispatcher::dispatch;
use crate::{CancelGuard, GatewayMetrics, NodeError, NodeResult};

use serde_json::Value;

/// Query entry point: open a connection for `service`, then dispatch
#[derive(Clone)]
pub struct QueryGateway {
    connector: NodeConnector,
    metrics: GatewayMetrics,
}

impl QueryGateway {
    pub fn new(connector: NodeConnector) -> Self {
        Self {
            connector,
            metrics: GatewayMetrics::new(),
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        self.connector.catalog()
    }

    pub async fn query(
        &self,
        service: &str,
        method: &str,
        candidates: &[Value],
        cancel: &mut CancelGuard,
    ) -> NodeResult<Value> {
        let result = self.query_inner(service, method, candidates, cancel).await;

        match &result {
            Ok(_) => self.metrics.query_succeeded(service),
            Err(e) => self.metrics.query_failed(e.error_code()),
        }

        result
    }

    async fn query_inner(
        &self,
        service: &str,
        method: &str,
        candidates: &[Value],
        cancel: &mut CancelGuard,
    ) -> NodeResult<Value> {
        let (handle, release) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(NodeError::cancelled()),
            opened = self.connector.open(service) => opened?,
        };

        dispatch(&handle, release, method, candidates, cancel).await
    }
}
