use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
};

use super::BoxFuture;

/// A **backend** turns chat messages into a network call to a concrete
/// provider (Groq, Gemini, a custom gateway, …) and returns the raw text of
/// the first answer.
///
/// The trait is intentionally minimal:
///
/// * the model, endpoint and credentials belong to the backend value itself,
/// * `chat_complete` performs a *single* non-streaming round-trip bounded by
///   the backend's own per-call timeout.
pub trait ChatCompletionProvider: Send + Sync {
    /// Stable provider name used in logs and results (`"groq"`, `"gemini"`, …).
    fn name(&self) -> &str;

    /// Execute the chat prompt and return the model's text.
    fn chat_complete<'a>(
        &'a self,
        params: ChatCompleteParameters,
    ) -> BoxFuture<'a, Result<GenericChatCompletionResponse>>;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters {
    pub messages: Vec<GenericMessage>,
    pub temperature: Option<f64>,
    /// Ask the backend to constrain output to a JSON object, where the API
    /// supports it.
    pub json_output: bool,
}

impl ChatCompleteParameters {
    pub fn new(messages: Vec<GenericMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            json_output: false,
        }
    }

    pub fn messages(&self) -> &[GenericMessage] {
        &self.messages
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}
