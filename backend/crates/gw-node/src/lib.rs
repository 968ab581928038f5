pub mod broadcast;
pub mod cancel;
pub mod client;
pub mod connection;
pub mod error;
pub mod metrics;
pub mod query;

#[cfg(test)]
mod tests;

pub use broadcast::Broadcaster;
pub use cancel::{CancelCoordinator, CancelGuard};
pub use client::RpcClient;
pub use connection::{NodeConnector, QueryServiceHandle, Release};
pub use error::{NodeError, Result as NodeResult};
pub use crate::metrics::GatewayMetrics;
pub use query::catalog::{
    BANK_SERVICE, QueryMethod, REGISTRY_SERVICE, ServiceCatalog, ServiceDescriptor,
};
pub use query::dispatcher::dispatch;
pub use query::gateway::QueryGateway;
pub use query::service::QueryService;
