use crate::query::catalog::{ServiceCatalog, ServiceDescriptor};
use crate::query::service::QueryService;
use crate::{NodeError, NodeResult, RpcClient};

use gw_config::NodeConfig;

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

/// Runs a release action exactly once: on [`Release::release`] or on drop,
/// whichever comes first.
pub struct Release {
    action: Option<Box<dyn FnOnce() + Send>>,
}

impl Release {
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// A release with nothing to do
    pub fn noop() -> Self {
        Self { action: None }
    }

    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl Drop for Release {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Release")
            .field("pending", &self.action.is_some())
            .finish()
    }
}

/// Opens one node connection per query call
#[derive(Clone)]
pub struct NodeConnector {
    config: NodeConfig,
    catalog: Arc<ServiceCatalog>,
}

impl NodeConnector {
    pub fn new(config: NodeConfig, catalog: Arc<ServiceCatalog>) -> Self {
        Self { config, catalog }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn rpc_url(&self) -> &str {
        &self.config.rpc_url
    }

    /// Resolve `service`, connect to the node and probe it.
    ///
    /// The returned [`Release`] must be released (or dropped) when the caller
    /// is done; afterwards the handle refuses further calls.
    pub async fn open(&self, service: &str) -> NodeResult<(QueryServiceHandle, Release)> {
        let descriptor = self.catalog.get(service).cloned().ok_or_else(|| {
            NodeError::service_not_found(
                service,
                self.catalog
                    .service_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )
        })?;

        // The probe opens the keep-alive connection every later call reuses
        let client = RpcClient::held_from_config(&self.config)?;
        client.status().await.map_err(|e| match e {
            NodeError::Connection { .. } => e,
            other => NodeError::connection(client.url(), other.message()),
        })?;

        info!("Connected to {} for {}", client.url(), descriptor.name);

        let url = client.url().to_string();
        let slot = Arc::new(Mutex::new(Some(Arc::new(client))));
        let release = {
            let slot = Arc::clone(&slot);
            let name = descriptor.name;
            Release::new(move || {
                // Dropping the last client reference closes its connection
                let client = lock(&slot).take();
                drop(client);
                debug!("Released connection to {} for {}", url, name);
            })
        };

        let handle = QueryServiceHandle { descriptor, slot };

        Ok((handle, release))
    }
}

type ClientSlot = Arc<Mutex<Option<Arc<RpcClient>>>>;

fn lock(slot: &ClientSlot) -> std::sync::MutexGuard<'_, Option<Arc<RpcClient>>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Query service bound to one open node connection.
///
/// The connection lives until the paired [`Release`] runs; a call already in
/// flight at that point finishes before the connection closes.
pub struct QueryServiceHandle {
    descriptor: ServiceDescriptor,
    slot: ClientSlot,
}

impl QueryServiceHandle {
    pub fn is_closed(&self) -> bool {
        lock(&self.slot).is_none()
    }

    /// Whether the handle still holds a keep-alive node connection
    pub fn holds_connection(&self) -> bool {
        lock(&self.slot).as_ref().is_some_and(|client| client.is_held())
    }

    fn client(&self) -> NodeResult<Arc<RpcClient>> {
        lock(&self.slot)
            .clone()
            .ok_or_else(|| NodeError::connection_closed(self.descriptor.name))
    }
}

#[async_trait]
impl QueryService for QueryServiceHandle {
    fn service_name(&self) -> &str {
        self.descriptor.name
    }

    fn method_names(&self) -> Vec<&str> {
        self.descriptor.method_names()
    }

    fn has_method(&self, method: &str) -> bool {
        self.descriptor.method(method).is_some()
    }

    async fn invoke(&self, method: &str, request: &Value) -> NodeResult<Value> {
        let client = self.client()?;

        let query = self.descriptor.method(method).ok_or_else(|| {
            NodeError::method_not_found(
                self.descriptor.name,
                method,
                self.descriptor
                    .method_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )
        })?;

        let data = (query.encode)(request)?;
        let bytes = client.abci_query(query.path, &data).await?;
        (query.decode)(&bytes)
    }
}
