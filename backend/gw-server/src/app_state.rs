use gw_config::{Config, NodeConfig};
use gw_core::MessageRegistry;
use gw_node::{Broadcaster, CancelCoordinator, NodeConnector, QueryGateway, ServiceCatalog};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MessageRegistry>,
    pub broadcaster: Broadcaster,
    pub queries: QueryGateway,
    pub cancel: CancelCoordinator,
    /// `None` when no Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
    pub body_limit_bytes: usize,
}

impl AppState {
    /// State over the standard message registry and query catalog
    pub fn new(node: NodeConfig, body_limit_bytes: usize, cancel: CancelCoordinator) -> Self {
        let connector = NodeConnector::new(node.clone(), Arc::new(ServiceCatalog::standard()));

        Self {
            registry: Arc::new(MessageRegistry::standard()),
            broadcaster: Broadcaster::new(node),
            queries: QueryGateway::new(connector),
            cancel,
            prometheus: None,
            body_limit_bytes,
        }
    }

    pub fn from_config(config: &Config, cancel: CancelCoordinator) -> Self {
        Self::new(
            config.node.clone(),
            config.server.body_limit_bytes,
            cancel,
        )
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
