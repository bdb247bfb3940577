use crate::domain::entities::{AuditRecord, CacheEntry, QueuedAction};
use crate::domain::value_objects::HttpMethod;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Durable persistence for queued actions, the entity cache and the audit
/// trail. The store is the single owner of all persisted rows; callers hold
/// only transient copies of what it returns.
#[async_trait]
pub trait OfflineStore: Send + Sync {
    /// Prepare the underlying schema. Idempotent; safe to call redundantly.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Append a new action with a fresh id and the current timestamp.
    async fn enqueue(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
    ) -> Result<QueuedAction, AppError>;

    /// All pending actions in ascending creation order (FIFO).
    async fn list_queued(&self) -> Result<Vec<QueuedAction>, AppError>;

    /// Delete one action. A no-op when the id no longer exists.
    async fn remove(&self, id: i64) -> Result<(), AppError>;

    /// Empty the queue unconditionally; returns the number of rows removed.
    async fn clear_queue(&self) -> Result<u64, AppError>;

    /// Upsert a cache entry with full-overwrite semantics.
    async fn save_entity(&self, id: &str, snapshot: &Value) -> Result<(), AppError>;

    /// All cache entries, most recently updated first.
    async fn list_entities(&self) -> Result<Vec<CacheEntry>, AppError>;

    /// Best-effort audit append: failures are logged internally and never
    /// surface to the caller.
    async fn append_audit(&self, action: &str, details: &str);

    /// Most recent `limit` audit records, newest first.
    async fn list_audit(&self, limit: u32) -> Result<Vec<AuditRecord>, AppError>;
}
