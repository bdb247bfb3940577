use crate::domain::value_objects::HttpMethod;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Outbound request channel to the backend proxy.
///
/// A 2xx response with a JSON payload is success; a connection error,
/// timeout or non-2xx status is a failure. The proxy is expected to tolerate
/// at-least-once delivery of the same request.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
    ) -> Result<Value, AppError>;
}
