use crate::{
    client::traits::GenerationBackend,
    error::{IconError, Result},
    logger,
    models::{GenerationRequest, GenerationResult},
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one `POST` with the request as its JSON body. Transport errors,
    /// non-success statuses and undecodable bodies all map to
    /// [`IconError::Network`]. There are no retries and no timeout here.
    pub async fn generate_icons(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let _timer = logger::timer("generate_icons");

        let request_json = serde_json::to_string(request)
            .map_err(|e| IconError::Serialization(e.to_string()))?;

        log::info!(
            "Requesting icon set from {} (style: {}, colors: {})",
            self.endpoint,
            request.style,
            request.colors.len()
        );
        log::debug!("Generation request payload: {}", request_json);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request_json)
            .send()
            .await
            .map_err(|e| {
                log::error!("Generation request failed: {:?}", e);
                IconError::Network(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Generation service returned {}: {}", status, body);
            return Err(IconError::Network(format!(
                "generation service returned {} - {}",
                status, body
            )));
        }

        let result: GenerationResult = response.json().await.map_err(|e| {
            IconError::Network(format!("failed to decode generation response: {}", e))
        })?;

        log::debug!(
            "Generation response: success={}, images={}",
            result.success,
            result.images.len()
        );
        Ok(result)
    }
}

#[async_trait]
impl GenerationBackend for GenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        self.generate_icons(request).await
    }
}
