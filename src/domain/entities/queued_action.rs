use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::value_objects::HttpMethod;

/// One pending network-bound side effect, exactly as persisted.
///
/// Endpoint, method and body never change after the row is written; the only
/// state transition is deletion once a replay is confirmed successful.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QueuedAction {
    pub id: i64,
    pub endpoint: String,
    pub method: String,
    pub body: String,
    pub created_at: i64,
}

impl QueuedAction {
    /// Parse the persisted method column back into its verb.
    pub fn http_method(&self) -> Result<HttpMethod, String> {
        HttpMethod::parse(&self.method)
    }
}
