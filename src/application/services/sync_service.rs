use crate::application::ports::{ApiTransport, ConnectivityProbe, OfflineStore};
use crate::domain::entities::QueuedAction;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    pub is_syncing: bool,
    pub last_sync: Option<i64>,
    pub sync_errors: u32,
}

/// Outcome of one drain pass over the queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncReport {
    pub synced_count: u32,
    pub failed_count: u32,
    pub pending_count: u32,
}

/// Background replay loop: drains the durable queue in FIFO order whenever
/// connectivity is present, deleting each action only on confirmed success.
pub struct SyncService {
    probe: Arc<dyn ConnectivityProbe>,
    transport: Arc<dyn ApiTransport>,
    store: Arc<dyn OfflineStore>,
    status: Arc<RwLock<SyncStatus>>,
}

impl SyncService {
    pub fn new(
        probe: Arc<dyn ConnectivityProbe>,
        transport: Arc<dyn ApiTransport>,
        store: Arc<dyn OfflineStore>,
    ) -> Self {
        Self {
            probe,
            transport,
            store,
            status: Arc::new(RwLock::new(SyncStatus {
                is_syncing: false,
                last_sync: None,
                sync_errors: 0,
            })),
        }
    }

    /// Run one sync pass.
    ///
    /// Reentrancy-guarded: a call that finds a pass already running returns an
    /// empty report without touching the queue or the network. The guard is
    /// claimed before the connectivity probe and always released, including
    /// when the pass errors out mid-drain.
    pub async fn sync_once(&self) -> Result<SyncReport, AppError> {
        {
            let mut status = self.status.write().await;
            if status.is_syncing {
                return Ok(SyncReport::default());
            }
            status.is_syncing = true;
        }

        if !self.probe.is_online().await {
            self.status.write().await.is_syncing = false;
            return Ok(SyncReport::default());
        }

        let result = self.drain().await;

        let mut status = self.status.write().await;
        status.is_syncing = false;
        match &result {
            Ok(report) => {
                status.last_sync = Some(chrono::Utc::now().timestamp());
                if report.failed_count > 0 {
                    status.sync_errors += report.failed_count;
                }
            }
            Err(_) => status.sync_errors += 1,
        }

        result
    }

    async fn drain(&self) -> Result<SyncReport, AppError> {
        let actions = self.store.list_queued().await?;
        if !actions.is_empty() {
            tracing::info!(
                target: "offline::sync",
                count = actions.len(),
                "replaying queued actions"
            );
        }

        let mut report = SyncReport::default();
        for action in &actions {
            match self.replay(action).await {
                Ok(()) => {
                    // Remove before advancing so a crash mid-pass cannot
                    // re-deliver an already confirmed action.
                    self.store.remove(action.id).await?;
                    report.synced_count += 1;
                    tracing::debug!(
                        target: "offline::sync",
                        id = action.id,
                        endpoint = %action.endpoint,
                        "queued action delivered"
                    );
                }
                Err(e) => {
                    report.failed_count += 1;
                    tracing::warn!(
                        target: "offline::sync",
                        id = action.id,
                        endpoint = %action.endpoint,
                        error = %e,
                        "replay failed, keeping action queued"
                    );
                }
            }
        }

        report.pending_count = self.store.list_queued().await?.len() as u32;
        Ok(report)
    }

    async fn replay(&self, action: &QueuedAction) -> Result<(), AppError> {
        let method = action.http_method().map_err(AppError::InvalidInput)?;
        let body: Value = serde_json::from_str(&action.body)?;
        self.transport.send(&action.endpoint, method, &body).await?;
        Ok(())
    }

    pub async fn get_status(&self) -> SyncStatus {
        self.status.read().await.clone()
    }

    /// Spawn the fixed-interval replay loop.
    ///
    /// The first tick fires one interval after the call, not immediately, and
    /// the task winds down when `shutdown` is cancelled. Tests drive
    /// [`sync_once`](Self::sync_once) directly instead of waiting on the
    /// timer.
    pub fn spawn_scheduler(
        self: &Arc<Self>,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // skip immediate tick

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        tracing::info!(target: "offline::sync", "sync scheduler shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        if let Err(e) = service.sync_once().await {
                            tracing::error!(
                                target: "offline::sync",
                                error = %e,
                                "scheduled sync pass failed"
                            );
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{GatedTransport, StaticProbe, StubTransport};
    use crate::domain::value_objects::HttpMethod;
    use crate::infrastructure::database::{ConnectionPool, SqliteOfflineStore};
    use serde_json::json;

    async fn setup_store() -> Arc<SqliteOfflineStore> {
        let pool = ConnectionPool::from_memory().await.unwrap();
        let store = SqliteOfflineStore::new(pool.get_pool().clone());
        store.initialize().await.unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn drains_queue_in_order_and_removes_on_success() {
        let store = setup_store().await;
        for i in 0..3 {
            store
                .enqueue("/api/analyze", HttpMethod::Post, &json!({ "seq": i }))
                .await
                .unwrap();
        }

        let probe = Arc::new(StaticProbe::online());
        let transport = Arc::new(StubTransport::succeeding(json!({"ok": true})));
        let service = SyncService::new(probe, transport.clone(), store.clone());

        let report = service.sync_once().await.unwrap();
        assert_eq!(report.synced_count, 3);
        assert_eq!(report.failed_count, 0);
        assert_eq!(report.pending_count, 0);
        assert!(store.list_queued().await.unwrap().is_empty());

        let calls = transport.calls();
        assert_eq!(calls.len(), 3);
        for (i, (_, _, body)) in calls.iter().enumerate() {
            assert_eq!(body, &json!({ "seq": i }));
        }
    }

    #[tokio::test]
    async fn failed_action_stays_queued_without_blocking_later_ones() {
        let store = setup_store().await;
        store
            .enqueue("/api/broken", HttpMethod::Post, &json!({"a": 1}))
            .await
            .unwrap();
        store
            .enqueue("/api/tasks", HttpMethod::Put, &json!({"b": 2}))
            .await
            .unwrap();
        store
            .enqueue("/api/tasks", HttpMethod::Delete, &json!({"c": 3}))
            .await
            .unwrap();

        let probe = Arc::new(StaticProbe::online());
        let transport = Arc::new(StubTransport::succeeding(json!({"ok": true})));
        transport.fail_endpoint("/api/broken");
        let service = SyncService::new(probe, transport.clone(), store.clone());

        let report = service.sync_once().await.unwrap();
        assert_eq!(report.synced_count, 2);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.pending_count, 1);

        let remaining = store.list_queued().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].endpoint, "/api/broken");
        assert_eq!(transport.calls().len(), 3);
    }

    #[tokio::test]
    async fn offline_pass_never_touches_queue_or_network() {
        let store = setup_store().await;
        store
            .enqueue("/api/analyze", HttpMethod::Post, &json!({"x": 1}))
            .await
            .unwrap();

        let probe = Arc::new(StaticProbe::offline());
        let transport = Arc::new(StubTransport::succeeding(json!({})));
        let service = SyncService::new(probe, transport.clone(), store.clone());

        for _ in 0..3 {
            let report = service.sync_once().await.unwrap();
            assert_eq!(report.synced_count, 0);
            assert_eq!(report.failed_count, 0);
        }
        assert!(transport.calls().is_empty());
        assert_eq!(store.list_queued().await.unwrap().len(), 1);
        assert!(!service.get_status().await.is_syncing);
    }

    #[tokio::test]
    async fn concurrent_sync_call_is_a_no_op() {
        let store = setup_store().await;
        store
            .enqueue("/api/analyze", HttpMethod::Post, &json!({"x": 1}))
            .await
            .unwrap();

        let probe = Arc::new(StaticProbe::online());
        let transport = Arc::new(GatedTransport::new());
        let service = Arc::new(SyncService::new(probe, transport.clone(), store.clone()));

        let first = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.sync_once().await })
        };

        // Wait until the first pass is parked inside the transport.
        while transport.call_count() == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let second = service.sync_once().await.unwrap();
        assert_eq!(second.synced_count, 0);
        assert_eq!(second.failed_count, 0);
        assert_eq!(transport.call_count(), 1);

        transport.release(1);
        let first_report = first.await.unwrap().unwrap();
        assert_eq!(first_report.synced_count, 1);
        assert!(store.list_queued().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn scheduler_stops_on_cancellation() {
        let store = setup_store().await;
        let probe = Arc::new(StaticProbe::offline());
        let transport = Arc::new(StubTransport::succeeding(json!({})));
        let service = Arc::new(SyncService::new(probe, transport, store));

        let shutdown = CancellationToken::new();
        let handle = service.spawn_scheduler(Duration::from_secs(3600), shutdown.clone());

        shutdown.cancel();
        handle.await.unwrap();
    }
}
