use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing text")]
    MissingText,
    #[error("API key not configured")]
    MissingApiKey,
    #[error("Upstream HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingText => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::MissingApiKey | RelayError::HttpError(_) | RelayError::JsonError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Upstream bodies are passed through verbatim.
        let error = match self {
            RelayError::Upstream { body, .. } => body.clone(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_passed_through() {
        let err = RelayError::Upstream { status: 429, body: "slow down".into() };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "Upstream HTTP 429: slow down");
    }

    #[test]
    fn invalid_upstream_status_maps_to_bad_gateway() {
        let err = RelayError::Upstream { status: 42, body: String::new() };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn configuration_and_input_errors_have_fixed_statuses() {
        assert_eq!(RelayError::MissingText.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::MissingApiKey.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
