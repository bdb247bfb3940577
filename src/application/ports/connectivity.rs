use async_trait::async_trait;

/// Answers whether outbound network access is currently viable.
///
/// Implementations must complete within a bounded time and never error;
/// anything indeterminate is reported as offline.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn is_online(&self) -> bool;
}
