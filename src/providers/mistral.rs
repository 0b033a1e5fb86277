use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::models::UpstreamConfig;
use crate::errors::RelayError;
use crate::models::chat::ChatCompletionRequest;
use crate::providers::provider::Provider;

pub struct MistralProvider {
    endpoint: String,
    api_key: String,
    http_client: Client,
}

impl MistralProvider {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl Provider for MistralProvider {
    fn name(&self) -> String {
        "mistral".to_string()
    }

    async fn chat_completions(
        &self,
        payload: ChatCompletionRequest,
    ) -> Result<Bytes, RelayError> {
        debug!(
            "Sending request to {} with payload: {}",
            self.endpoint,
            serde_json::to_string(&payload).unwrap_or_default()
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Mistral API request error: {e}");
                RelayError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            debug!("Received {} response from API ({} bytes)", status, body.len());
            Ok(body)
        } else {
            let body = response.bytes().await?;
            error!(
                "Mistral API returned {}: {}",
                status,
                String::from_utf8_lossy(&body)
            );
            Err(RelayError::Upstream { status, body })
        }
    }
}
