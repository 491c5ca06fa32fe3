use async_trait::async_trait;
use reqwest::Client as HttpClient;

use super::models::{ChatCompletion, ChatRequest};
use super::service::ChatModel;
use crate::error::RelayError;

/// Chat-completion client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiService {
    http_client: HttpClient,
    endpoint: String,
}

impl OpenAiService {
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiService {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, RelayError> {
        log::debug!("Sending chat completion to {} (model {})", self.endpoint, request.model);

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)?;
        Ok(completion.first_content())
    }
}
