use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Append-only audit trail row. Never updated or deleted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditRecord {
    pub id: i64,
    pub action: String,
    pub details: Option<String>,
    pub timestamp: i64,
}
