use gloo_net::http::Request;
use shared::{ClassifyRequest, NovaResult};

use crate::error::PipelineError;

pub const CLASSIFY_ENDPOINT: &str = "/api/classify";

/// Sends the recognized text to the same-origin relay.
pub async fn classify(text: &str) -> Result<NovaResult, PipelineError> {
    let request = Request::post(CLASSIFY_ENDPOINT)
        .json(&ClassifyRequest { text: text.to_string() })
        .map_err(|e| PipelineError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| PipelineError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(PipelineError::Relay { status, body });
    }

    response
        .json::<NovaResult>()
        .await
        .map_err(|e| PipelineError::Response(e.to_string()))
}
