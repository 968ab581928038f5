use crate::NodeResult;

use async_trait::async_trait;
use serde_json::Value;

/// A query service whose methods are looked up by name at runtime
#[async_trait]
pub trait QueryService: Send + Sync {
    fn service_name(&self) -> &str;

    /// Every callable method name, sorted
    fn method_names(&self) -> Vec<&str>;

    fn has_method(&self, method: &str) -> bool {
        self.method_names().contains(&method)
    }

    /// Invoke `method` with one candidate request
    async fn invoke(&self, method: &str, request: &Value) -> NodeResult<Value>;
}
