//! Model identifiers for the supported text-generation backends.
//!
//! Application code picks an enum variant instead of typing literal strings
//! such as `"llama-3.3-70b-versatile"`; each backend crate maps the variants
//! onto its own naming scheme in its `model_map` module. Configuration
//! overrides arrive as [`Model::Custom`].
//!
//! ```rust
//! use atelier_core::model::{GroqModel, Model};
//! assert_eq!(Model::from(GroqModel::Llama3_3_70b), Model::Groq(GroqModel::Llama3_3_70b));
//! ```

use std::borrow::Cow;

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models served by Groq's OpenAI-compatible API.
    Groq(GroqModel),
    /// Google Gemini models.
    Gemini(GeminiModel),
    /// Any model name taken verbatim from configuration.
    Custom(Cow<'static, str>),
}

impl Model {
    /// Build a [`Model::Custom`] from a configured model name.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Model::Custom(name.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_3_70b,
    Llama3_1_8bInstant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    Gemini2_0Flash,
    Gemini2_5Flash,
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
