use crate::shared::error::AppError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use keyring::Entry;
use tracing::debug;

const SERVICE_NAME: &str = "clinic-sync";

/// Platform-keychain storage for API keys and PHI access tokens.
#[async_trait]
pub trait SecureStorage: Send + Sync {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
    async fn exists(&self, key: &str) -> Result<bool, AppError>;
}

pub struct SecureTokenStore;

impl SecureTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(key: &str) -> Result<Entry> {
        Entry::new(SERVICE_NAME, key).context("Failed to create keyring entry")
    }
}

impl Default for SecureTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

fn to_storage_error(err: anyhow::Error) -> AppError {
    AppError::Storage(err.to_string())
}

#[async_trait]
impl SecureStorage for SecureTokenStore {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        let entry = Self::entry(key).map_err(to_storage_error)?;
        entry
            .set_password(value)
            .map_err(|e| AppError::Storage(format!("Failed to store secure value: {e}")))?;
        debug!(target: "offline::secure", key, "secure value stored");
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError> {
        let entry = Self::entry(key).map_err(to_storage_error)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read secure value: {e}"
            ))),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let entry = Self::entry(key).map_err(to_storage_error)?;
        match entry.delete_credential() {
            // Already deleted is fine.
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to delete secure value: {e}"
            ))),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        let entry = Self::entry(key).map_err(to_storage_error)?;
        match entry.get_password() {
            Ok(_) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to check secure value: {e}"
            ))),
        }
    }
}
