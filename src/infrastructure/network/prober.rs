use crate::application::ports::ConnectivityProbe;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Connectivity check against the backend proxy's root endpoint.
///
/// Any response at all proves the network path is up, whatever the status
/// code; a transport error or timeout is reported as offline. The probe
/// never raises.
pub struct HttpConnectivityProbe {
    client: Client,
    probe_url: String,
}

impl HttpConnectivityProbe {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build probe client: {e}")))?;

        Ok(Self {
            client,
            probe_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ConnectivityProbe for HttpConnectivityProbe {
    async fn is_online(&self) -> bool {
        match self.client.get(&self.probe_url).send().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(
                    target: "offline::probe",
                    error = %e,
                    "connectivity probe failed, treating as offline"
                );
                false
            }
        }
    }
}
