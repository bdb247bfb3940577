use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Locally cached snapshot of a domain entity (e.g. a patient record).
/// Saved wholesale on every write; no partial merges.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CacheEntry {
    pub id: String,
    pub data: String,
    pub last_updated: i64,
}
