use crate::application::ports::ApiTransport;
use crate::domain::value_objects::HttpMethod;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed transport to the backend proxy.
pub struct HttpApiTransport {
    client: Client,
    base_url: String,
}

impl HttpApiTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ApiTransport for HttpApiTransport {
    async fn send(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
    ) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = match method {
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request to {endpoint} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Network(format!(
                "{endpoint} returned {status}: {detail}"
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;
        if text.is_empty() {
            // DELETE endpoints commonly answer 2xx with no body.
            return Ok(Value::Null);
        }
        let payload = serde_json::from_str(&text)?;
        Ok(payload)
    }
}
