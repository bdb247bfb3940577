use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub sync: SyncConfig,
    pub audit: AuditConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend proxy, e.g. "http://localhost:3000".
    pub base_url: String,
    /// Upper bound for the connectivity probe, in seconds.
    pub probe_timeout: u64,
    /// Per-request timeout for dispatch and replay attempts, in seconds.
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub auto_sync: bool,
    pub sync_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Most-recent-N window returned by audit reads.
    pub read_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/clinic.db".to_string(),
                max_connections: 5,
            },
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                probe_timeout: 3,
                request_timeout: 30,
            },
            sync: SyncConfig {
                auto_sync: true,
                sync_interval: 30,
            },
            audit: AuditConfig { read_limit: 50 },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("CLINIC_DATABASE_URL") {
            if !v.trim().is_empty() {
                cfg.database.url = v;
            }
        }
        if let Ok(v) = std::env::var("CLINIC_DATABASE_MAX_CONNECTIONS") {
            if let Some(value) = parse_u32(&v) {
                cfg.database.max_connections = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("CLINIC_API_BASE_URL") {
            if !v.trim().is_empty() {
                cfg.api.base_url = v;
            }
        }
        if let Ok(v) = std::env::var("CLINIC_PROBE_TIMEOUT") {
            if let Some(value) = parse_u64(&v) {
                cfg.api.probe_timeout = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("CLINIC_REQUEST_TIMEOUT") {
            if let Some(value) = parse_u64(&v) {
                cfg.api.request_timeout = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("CLINIC_AUTO_SYNC") {
            cfg.sync.auto_sync = parse_bool(&v, cfg.sync.auto_sync);
        }
        if let Ok(v) = std::env::var("CLINIC_SYNC_INTERVAL") {
            if let Some(value) = parse_u64(&v) {
                cfg.sync.sync_interval = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("CLINIC_AUDIT_READ_LIMIT") {
            if let Some(value) = parse_u32(&v) {
                cfg.audit.read_limit = value.max(1);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.api.base_url.trim().is_empty() {
            return Err("API base_url must not be empty".to_string());
        }
        if self.api.probe_timeout == 0 {
            return Err("API probe_timeout must be greater than 0".to_string());
        }
        if self.api.request_timeout == 0 {
            return Err("API request_timeout must be greater than 0".to_string());
        }
        if self.sync.sync_interval == 0 {
            return Err("Sync sync_interval must be greater than 0".to_string());
        }
        if self.audit.read_limit == 0 {
            return Err("Audit read_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sync.sync_interval, 30);
        assert_eq!(cfg.audit.read_limit, 50);
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut cfg = AppConfig::default();
        cfg.api.base_url = "  ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut cfg = AppConfig::default();
        cfg.sync.sync_interval = 0;
        assert!(cfg.validate().is_err());
    }
}
