use async_trait::async_trait;
use shared::NovaResult;
use shared::extract::parse_model_reply;
use std::sync::Arc;

use super::models::ChatRequest;
use super::prompt;
use crate::error::RelayError;

/// Upstream language model. Returns the text of the first reply message.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, RelayError>;
}

/// Sole holder of the upstream credential.
#[derive(Clone)]
pub struct ClassifierService {
    api_key: Option<String>,
    model: String,
    chat: Arc<dyn ChatModel>,
}

impl ClassifierService {
    pub fn new(api_key: Option<String>, model: String, chat: Arc<dyn ChatModel>) -> Self {
        Self { api_key, model, chat }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn classify(&self, ingredients: &str) -> Result<NovaResult, RelayError> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;
        let request = prompt::build_request(&self.model, ingredients);
        let content = self.chat.complete(api_key, &request).await?;
        Ok(parse_model_reply(&content))
    }
}
