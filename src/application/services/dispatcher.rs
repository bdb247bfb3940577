use crate::application::ports::{ApiTransport, ConnectivityProbe, OfflineStore};
use crate::domain::value_objects::HttpMethod;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Caller-facing result of an execute-or-queue call.
///
/// "Tried online and failed" and "never tried, offline" collapse into the
/// same `queued: true` outcome so UI code needs a single fallback path; the
/// distinction lives in the logs only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchOutcome {
    pub success: bool,
    pub queued: bool,
    pub data: Option<Value>,
}

impl DispatchOutcome {
    fn delivered(data: Value) -> Self {
        Self {
            success: true,
            queued: false,
            data: Some(data),
        }
    }

    fn queued() -> Self {
        Self {
            success: false,
            queued: true,
            data: None,
        }
    }
}

/// Uniform "do this now if possible, otherwise remember it for later"
/// contract. Callers never handle connectivity errors; they get a structured
/// outcome instead.
pub struct DispatchService {
    probe: Arc<dyn ConnectivityProbe>,
    transport: Arc<dyn ApiTransport>,
    store: Arc<dyn OfflineStore>,
}

impl DispatchService {
    pub fn new(
        probe: Arc<dyn ConnectivityProbe>,
        transport: Arc<dyn ApiTransport>,
        store: Arc<dyn OfflineStore>,
    ) -> Self {
        Self {
            probe,
            transport,
            store,
        }
    }

    /// Attempt the request once when online, queue it otherwise.
    ///
    /// Exactly one network attempt or zero is made, and at most one action is
    /// enqueued; a successful attempt never enqueues. Transport failures are
    /// logged and become the queued outcome; only a storage failure on the
    /// enqueue itself propagates as `Err`.
    pub async fn execute_or_queue(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
    ) -> Result<DispatchOutcome, AppError> {
        if self.probe.is_online().await {
            match self.transport.send(endpoint, method, body).await {
                Ok(data) => return Ok(DispatchOutcome::delivered(data)),
                Err(e) => {
                    tracing::warn!(
                        target: "offline::dispatch",
                        endpoint,
                        method = method.as_str(),
                        error = %e,
                        "live request failed, queueing for replay"
                    );
                }
            }
        } else {
            tracing::debug!(
                target: "offline::dispatch",
                endpoint,
                method = method.as_str(),
                "offline, queueing action"
            );
        }

        let action = self.store.enqueue(endpoint, method, body).await?;
        tracing::debug!(target: "offline::dispatch", id = action.id, "action queued");
        Ok(DispatchOutcome::queued())
    }
}
