pub mod audit_record;
pub mod cache_entry;
pub mod queued_action;

pub use audit_record::AuditRecord;
pub use cache_entry::CacheEntry;
pub use queued_action::QueuedAction;
