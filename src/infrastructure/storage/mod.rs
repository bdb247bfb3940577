pub mod secure_storage;

pub use secure_storage::{SecureStorage, SecureTokenStore};
