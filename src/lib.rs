//! Offline action queue and synchronization core for the Gemini Clinic
//! mobile client.
//!
//! When the backend proxy is unreachable, outbound actions are persisted to a
//! local SQLite queue and replayed in order once connectivity returns. The
//! receiving endpoints must tolerate at-least-once delivery: an action is
//! removed from the queue only after a confirmed-successful replay.
//!
//! Components are wired by injection:
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! use clinic_sync::application::ports::OfflineStore;
//! use clinic_sync::application::services::{DispatchService, SyncService};
//! use clinic_sync::infrastructure::database::{ConnectionPool, SqliteOfflineStore};
//! use clinic_sync::infrastructure::network::{HttpApiTransport, HttpConnectivityProbe};
//! use clinic_sync::shared::config::AppConfig;
//!
//! # async fn wire() -> Result<(), clinic_sync::shared::error::AppError> {
//! let config = AppConfig::from_env();
//! config.validate().map_err(clinic_sync::shared::error::AppError::Configuration)?;
//!
//! let pool = ConnectionPool::new(&config.database.url, config.database.max_connections).await?;
//! let store = Arc::new(SqliteOfflineStore::new(pool.get_pool().clone()));
//! store.initialize().await?;
//!
//! let probe = Arc::new(HttpConnectivityProbe::new(
//!     &config.api.base_url,
//!     Duration::from_secs(config.api.probe_timeout),
//! )?);
//! let transport = Arc::new(HttpApiTransport::new(
//!     &config.api.base_url,
//!     Duration::from_secs(config.api.request_timeout),
//! )?);
//!
//! let dispatcher = DispatchService::new(probe.clone(), transport.clone(), store.clone());
//! let sync = Arc::new(SyncService::new(probe, transport, store));
//!
//! let shutdown = CancellationToken::new();
//! if config.sync.auto_sync {
//!     sync.spawn_scheduler(Duration::from_secs(config.sync.sync_interval), shutdown.clone());
//! }
//! # let _ = dispatcher;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use shared::config::AppConfig;
pub use shared::error::AppError;
pub use shared::logging::init_logging;
