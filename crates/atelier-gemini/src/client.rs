use std::time::Duration;

use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use tracing::debug;

use crate::{
    api_v1beta::{GenerateContentRequest, GenerateContentResponse},
    error::GeminiError,
};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-goog-api-key");

/// Minimal HTTP client for Gemini's `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: HttpClient,
    base: String,
    headers: HeaderMap,
}

impl GeminiClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        Ok(Self {
            http: HttpClient::builder().timeout(timeout).build()?,
            base: base_url.into().trim_end_matches('/').to_owned(),
            headers,
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base)
    }

    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let resp = self
            .http
            .post(self.endpoint(model))
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        debug!(provider = "gemini", model, %status, "generateContent response");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_embeds_model() {
        let client = GeminiClient::new(
            "key",
            "https://generativelanguage.googleapis.com/v1beta/",
            Duration::from_secs(60),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.0-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(client.headers["x-goog-api-key"], "key");
    }
}
