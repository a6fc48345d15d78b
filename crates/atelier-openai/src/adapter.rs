use std::{env, sync::Arc, time::Duration};

use atelier_core::{
    error::{AtelierError, Result},
    model::{GroqModel, Model},
};
use reqwest::header::HeaderName;

use crate::{
    client::{AuthScheme, OpenAiClient},
    model_map::map_model,
};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// An OpenAI-compatible chat backend bound to one endpoint, key and model.
///
/// The same type serves Groq and any custom gateway speaking the
/// chat-completions envelope; only name, base URL, auth scheme and model
/// differ. All user-facing behaviour sits on
/// [`atelier_core::ChatRecommender`] once the adapter is plugged in.
pub struct OpenAiAdapter {
    pub(crate) name: String,
    pub(crate) model: String,
    pub(crate) json_mode: bool,
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    /// Wire model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use atelier_openai::OpenAiAdapterBuilder;
///
/// let groq = OpenAiAdapterBuilder::groq_from_env()
///     .build()
///     .expect("GROQ_API_KEY must be set");
/// ```
#[derive(Clone)]
pub struct OpenAiAdapterBuilder {
    name: String,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<Model>,
    auth: AuthScheme,
    timeout: Duration,
    json_mode: bool,
}

impl std::fmt::Debug for OpenAiAdapterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAdapterBuilder")
            .field("name", &self.name)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("auth", &self.auth)
            .field("timeout", &self.timeout)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

impl OpenAiAdapterBuilder {
    /// An *empty* builder for a provider called `name`. Supply key, base URL
    /// and model before building.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: None,
            base_url: None,
            model: None,
            auth: AuthScheme::Bearer,
            timeout: DEFAULT_TIMEOUT,
            json_mode: false,
        }
    }

    /// Groq defaults: bearer auth, public endpoint, Llama 3.3 70B, JSON mode.
    pub fn groq() -> Self {
        Self::new("groq")
            .with_base_url(GROQ_BASE_URL)
            .with_model(GroqModel::Llama3_3_70b)
            .with_json_mode(true)
    }

    /// [`Self::groq`] with `GROQ_API_KEY`, `GROQ_MODEL` and `GROQ_BASE_URL`
    /// taken from the environment when set.
    ///
    /// Never panics. A missing key only surfaces during [`Self::build`].
    pub fn groq_from_env() -> Self {
        let mut builder = Self::groq();
        builder.api_key = non_blank_env("GROQ_API_KEY");
        if let Some(model) = non_blank_env("GROQ_MODEL") {
            builder = builder.with_model(Model::custom(model));
        }
        if let Some(base) = non_blank_env("GROQ_BASE_URL") {
            builder = builder.with_base_url(base);
        }
        builder
    }

    /// Telkom-style custom gateway: OpenAI envelope, key in an `x-api-key`
    /// header. Base URL and model must be supplied.
    pub fn telkom() -> Self {
        Self::new("telkom").with_auth(AuthScheme::Header(HeaderName::from_static("x-api-key")))
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_auth(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    /// Per-request timeout (default 60 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `response_format = json_object` when JSON output is requested.
    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`AtelierError::Invalid`] – key, base URL or model missing, or the
    ///   model is not served by this kind of backend.
    /// * [`AtelierError::Backend`] – the HTTP client could not be created.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AtelierError::Invalid(format!("missing API key for `{}`", self.name)))?;
        let base_url = self
            .base_url
            .ok_or_else(|| AtelierError::Invalid(format!("missing base URL for `{}`", self.name)))?;
        let model = self
            .model
            .ok_or_else(|| AtelierError::Invalid(format!("missing model for `{}`", self.name)))?;
        let model = map_model(&model).ok_or_else(|| {
            AtelierError::InvalidRequest(format!(
                "backend `{}` does not support selected model: {model:?}",
                self.name
            ))
        })?;

        let client = OpenAiClient::new(&self.name, &api_key, base_url, &self.auth, self.timeout)?;

        Ok(OpenAiAdapter {
            name: self.name,
            model: model.into_owned(),
            json_mode: self.json_mode,
            client: Arc::new(client),
        })
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use atelier_core::model::GeminiModel;

    use super::*;

    #[test]
    fn groq_defaults() {
        let adapter = OpenAiAdapterBuilder::groq().with_api_key("gsk").build().unwrap();
        assert_eq!(adapter.name, "groq");
        assert_eq!(adapter.model(), "llama-3.3-70b-versatile");
        assert!(adapter.json_mode);
        assert_eq!(
            adapter.client.endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn debug_redacts_key() {
        let builder = OpenAiAdapterBuilder::groq().with_api_key("gsk_secret");
        let rendered = format!("{builder:?}");
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn blank_key_is_missing() {
        let err = OpenAiAdapterBuilder::groq().with_api_key("  ").build().err().unwrap();
        assert_eq!(err.to_string(), "invalid: missing API key for `groq`");
    }

    #[test]
    fn telkom_needs_base_url() {
        let err = OpenAiAdapterBuilder::telkom()
            .with_api_key("k")
            .with_model(Model::custom("telkom-llm"))
            .build()
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "invalid: missing base URL for `telkom`");
    }

    #[test]
    fn gemini_model_is_rejected() {
        let err = OpenAiAdapterBuilder::groq()
            .with_api_key("k")
            .with_model(GeminiModel::Gemini2_0Flash)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, AtelierError::InvalidRequest(_)));
    }
}
