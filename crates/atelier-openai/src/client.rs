use std::time::Duration;

use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use tracing::debug;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

/// How the API key is presented to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>` (OpenAI, Groq).
    Bearer,
    /// The raw key in a custom header, e.g. `x-api-key: <key>`.
    Header(HeaderName),
}

/// Minimal HTTP client for an OpenAI-compatible *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Every request is bounded by the timeout given at construction.
/// * Shares a single `reqwest::Client`, so cloning is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    provider: String,
    http: HttpClient,
    base: String,
    headers: HeaderMap,
}

impl OpenAiClient {
    pub fn new(
        provider: impl Into<String>,
        api_key: &str,
        base_url: impl Into<String>,
        auth: &AuthScheme,
        timeout: Duration,
    ) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            provider: provider.into(),
            http,
            base: base_url.into().trim_end_matches('/').to_owned(),
            headers: auth_headers(api_key, auth)?,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base)
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let resp = self
            .http
            .post(self.endpoint())
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        debug!(
            provider = %self.provider,
            model = %request.model,
            %status,
            "chat completion response"
        );
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenAiError::Api {
                provider: self.provider.clone(),
                status,
                body,
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

fn auth_headers(api_key: &str, auth: &AuthScheme) -> Result<HeaderMap, OpenAiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    match auth {
        AuthScheme::Bearer => {
            let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        AuthScheme::Header(name) => {
            let mut value = HeaderValue::from_str(api_key)?;
            value.set_sensitive(true);
            headers.insert(name.clone(), value);
        }
    }
    Ok(headers)
}
