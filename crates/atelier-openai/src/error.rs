use atelier_core::error::AtelierError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

/// Every failure mode of an OpenAI-compatible backend.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key is not a valid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("{provider} returned non-success status {status}: {body}")]
    Api {
        provider: String,
        status: StatusCode,
        body: String,
    },

    #[error("response format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for AtelierError {
    fn from(value: OpenAiError) -> Self {
        AtelierError::Backend(Box::new(value))
    }
}
