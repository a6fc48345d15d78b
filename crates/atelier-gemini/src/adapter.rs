use std::{env, sync::Arc, time::Duration};

use atelier_core::{
    error::{AtelierError, Result},
    model::{GeminiModel, Model},
};

use crate::{client::GeminiClient, model_map::map_model};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini backend bound to one key and model.
pub struct GeminiAdapter {
    pub(crate) model: String,
    pub(crate) client: Arc<GeminiClient>,
}

impl GeminiAdapter {
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Builder for [`GeminiAdapter`].
///
/// ```rust,no_run
/// use atelier_gemini::GeminiAdapterBuilder;
///
/// let gemini = GeminiAdapterBuilder::new_from_env()
///     .build()
///     .expect("GEMINI_API_KEY must be set");
/// ```
#[derive(Clone)]
pub struct GeminiAdapterBuilder {
    api_key: Option<String>,
    base_url: String,
    model: Model,
    timeout: Duration,
}

impl std::fmt::Debug for GeminiAdapterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAdapterBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GeminiAdapterBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: GEMINI_BASE_URL.to_owned(),
            model: GeminiModel::Gemini2_0Flash.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `GEMINI_API_KEY`, `GEMINI_MODEL` and `GEMINI_BASE_URL`.
    ///
    /// Never panics. A missing key only surfaces during [`Self::build`].
    pub fn new_from_env() -> Self {
        let mut builder = Self::new();
        builder.api_key = non_blank_env("GEMINI_API_KEY");
        if let Some(model) = non_blank_env("GEMINI_MODEL") {
            builder.model = Model::custom(model);
        }
        if let Some(base) = non_blank_env("GEMINI_BASE_URL") {
            builder.base_url = base;
        }
        builder
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    /// Per-request timeout (default 60 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// # Errors
    ///
    /// * [`AtelierError::Invalid`] – the API key is missing or blank.
    /// * [`AtelierError::InvalidRequest`] – the model is not a Gemini model.
    pub fn build(self) -> Result<GeminiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AtelierError::Invalid("missing env variable: `GEMINI_API_KEY`".into()))?;
        let model = map_model(&self.model).ok_or_else(|| {
            AtelierError::InvalidRequest(format!(
                "backend does not support selected model: {:?}",
                self.model
            ))
        })?;

        let client = GeminiClient::new(&api_key, self.base_url, self.timeout)?;
        Ok(GeminiAdapter {
            model: model.into_owned(),
            client: Arc::new(client),
        })
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
