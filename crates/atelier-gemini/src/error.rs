use atelier_core::error::AtelierError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key is not a valid header value: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl From<GeminiError> for AtelierError {
    fn from(value: GeminiError) -> Self {
        AtelierError::Backend(Box::new(value))
    }
}
