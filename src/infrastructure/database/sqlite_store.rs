use crate::application::ports::OfflineStore;
use crate::domain::entities::{AuditRecord, CacheEntry, QueuedAction};
use crate::domain::value_objects::HttpMethod;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;

/// SQLite-backed durable store for the offline queue, the entity cache and
/// the audit trail. All rows live in three independent tables; no operation
/// spans more than one of them.
pub struct SqliteOfflineStore {
    pool: SqlitePool,
}

impl SqliteOfflineStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_action_by_id(&self, id: i64) -> Result<QueuedAction, AppError> {
        let action = sqlx::query_as::<_, QueuedAction>(
            r#"
            SELECT * FROM offline_actions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(action)
    }
}

#[async_trait]
impl OfflineStore for SqliteOfflineStore {
    async fn initialize(&self) -> Result<(), AppError> {
        // CREATE TABLE IF NOT EXISTS keeps this idempotent; a redundant call
        // sees the existing tables and changes nothing.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS offline_actions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                endpoint TEXT NOT NULL,
                method TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS entity_cache (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                last_updated INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS audit_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                action TEXT NOT NULL,
                details TEXT,
                timestamp INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!(target: "offline::store", "database schema initialized");
        Ok(())
    }

    async fn enqueue(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
    ) -> Result<QueuedAction, AppError> {
        let body_json = serde_json::to_string(body)?;
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO offline_actions (endpoint, method, body, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(endpoint)
        .bind(method.as_str())
        .bind(&body_json)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        self.fetch_action_by_id(result.last_insert_rowid()).await
    }

    async fn list_queued(&self) -> Result<Vec<QueuedAction>, AppError> {
        let actions = sqlx::query_as::<_, QueuedAction>(
            r#"
            SELECT * FROM offline_actions
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(actions)
    }

    async fn remove(&self, id: i64) -> Result<(), AppError> {
        // Deleting an already-removed row is fine; rows_affected 0 is not an
        // error (double-removal race).
        sqlx::query("DELETE FROM offline_actions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear_queue(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM offline_actions")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn save_entity(&self, id: &str, snapshot: &Value) -> Result<(), AppError> {
        let data = serde_json::to_string(snapshot)?;
        let last_updated = Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO entity_cache (id, data, last_updated)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(id)
        .bind(&data)
        .bind(last_updated)
        .execute(&self.pool)
        .await?;

        self.append_audit("entity_save", &format!("Saved entity {id}"))
            .await;
        Ok(())
    }

    async fn list_entities(&self) -> Result<Vec<CacheEntry>, AppError> {
        let entries = sqlx::query_as::<_, CacheEntry>(
            r#"
            SELECT * FROM entity_cache
            ORDER BY last_updated DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn append_audit(&self, action: &str, details: &str) {
        let timestamp = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO audit_logs (action, details, timestamp)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(action)
        .bind(details)
        .bind(timestamp)
        .execute(&self.pool)
        .await;

        // Audit is best-effort and never load-bearing.
        if let Err(e) = result {
            tracing::warn!(
                target: "offline::store",
                action,
                error = %e,
                "audit write failed, dropping record"
            );
        }
    }

    async fn list_audit(&self, limit: u32) -> Result<Vec<AuditRecord>, AppError> {
        let records = sqlx::query_as::<_, AuditRecord>(
            r#"
            SELECT * FROM audit_logs
            ORDER BY timestamp DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
