pub mod dispatcher;
pub mod sync_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::{DispatchOutcome, DispatchService};
pub use sync_service::{SyncReport, SyncService, SyncStatus};
