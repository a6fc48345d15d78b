//! Adapter that turns a chat transport plus a prompt source into a
//! [`RecommendationProvider`].
//!
//! Every backend crate only implements [`ChatCompletionProvider`]; the steps
//! shared by all of them live here:
//!
//! 1. render the prompt for the requested kind and label,
//! 2. make one chat completion call,
//! 3. strip markdown fences and decode the JSON strictly,
//! 4. pick the list for the kind and normalise it.
//!
//! Any failure along the way becomes the single error of that attempt.
use std::sync::Arc;

use tracing::debug;

use crate::{
    error::Result,
    parse::parse_response,
    provider::{BoxFuture, ChatCompleteParameters, ChatCompletionProvider, RecommendationProvider},
    recommendation::{RecommendationKind, normalize_items},
    template::PromptSource,
};

/// A recommender bound to a single backend.
///
/// Cloning is cheap; backend and prompts are shared behind `Arc`.
#[derive(Debug)]
pub struct ChatRecommender<B, P> {
    backend: Arc<B>,
    prompts: Arc<P>,
    temperature: Option<f64>,
}

impl<B, P> Clone for ChatRecommender<B, P> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            prompts: Arc::clone(&self.prompts),
            temperature: self.temperature,
        }
    }
}

impl<B, P> ChatRecommender<B, P>
where
    B: ChatCompletionProvider,
    P: PromptSource,
{
    pub fn new(backend: B, prompts: P) -> Self {
        Self {
            backend: Arc::new(backend),
            prompts: Arc::new(prompts),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Access the underlying backend (e.g. to inspect provider settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn recommend(&self, kind: RecommendationKind, label: &str) -> Result<Vec<String>> {
        let mut params =
            ChatCompleteParameters::new(self.prompts.render(kind, label)).with_json_output();
        if let Some(temperature) = self.temperature {
            params = params.with_temperature(temperature);
        }

        let response = self.backend.chat_complete(params).await?;
        if let Some(usage) = response.usage {
            debug!(
                provider = self.backend.name(),
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        let items = parse_response(&response.content)?.into_items(kind)?;
        normalize_items(kind, items)
    }
}

impl<B, P> RecommendationProvider for ChatRecommender<B, P>
where
    B: ChatCompletionProvider,
    P: PromptSource,
{
    fn name(&self) -> &str {
        self.backend.name()
    }

    fn generate_color_recommendations<'a>(
        &'a self,
        skin_tone: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>>> {
        Box::pin(self.recommend(RecommendationKind::Color, skin_tone))
    }

    fn generate_style_recommendations<'a>(
        &'a self,
        body_type: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>>> {
        Box::pin(self.recommend(RecommendationKind::Style, body_type))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        error::AtelierError,
        generic::{GenericChatCompletionResponse, GenericMessage, GenericRole, GenericUsageReport},
    };

    /// Replies with a canned text and remembers the last request.
    struct CannedBackend {
        reply: &'static str,
        seen: Mutex<Option<ChatCompleteParameters>>,
    }

    impl CannedBackend {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                seen: Mutex::new(None),
            }
        }
    }

    impl ChatCompletionProvider for CannedBackend {
        fn name(&self) -> &str {
            "canned"
        }

        fn chat_complete<'a>(
            &'a self,
            params: ChatCompleteParameters,
        ) -> BoxFuture<'a, Result<GenericChatCompletionResponse>> {
            *self.seen.lock().unwrap() = Some(params);
            Box::pin(async move {
                Ok(GenericChatCompletionResponse {
                    content: self.reply.to_owned(),
                    usage: Some(GenericUsageReport {
                        prompt_tokens: 10,
                        completion_tokens: 5,
                        total_tokens: 15,
                    }),
                })
            })
        }
    }

    struct EchoLabel;

    impl PromptSource for EchoLabel {
        fn render(&self, kind: RecommendationKind, label: &str) -> Vec<GenericMessage> {
            vec![GenericMessage::new(format!("{kind}:{label}"), GenericRole::User)]
        }
    }

    #[tokio::test]
    async fn parses_fenced_colors() {
        let recommender = ChatRecommender::new(
            CannedBackend::new("```json\n{\"colors\": [\"#abcdef\", \"#123456\"]}\n```"),
            EchoLabel,
        )
        .with_temperature(0.3);

        let colors = recommender.generate_color_recommendations("olive").await.unwrap();
        assert_eq!(colors, vec!["#ABCDEF", "#123456"]);

        let seen = recommender.backend().seen.lock().unwrap().clone().unwrap();
        assert!(seen.json_output);
        assert_eq!(seen.temperature, Some(0.3));
        assert_eq!(seen.messages()[0].content, "color:olive");
    }

    #[tokio::test]
    async fn missing_field_is_an_error() {
        let recommender =
            ChatRecommender::new(CannedBackend::new("{\"colors\": [\"#000000\"]}"), EchoLabel);
        let err = recommender.generate_style_recommendations("apple").await.unwrap_err();
        assert!(matches!(
            err,
            AtelierError::EmptyRecommendations { field: "styles" }
        ));
    }

    #[tokio::test]
    async fn prose_is_a_parse_error() {
        let recommender = ChatRecommender::new(CannedBackend::new("I recommend navy."), EchoLabel);
        let err = recommender.generate_color_recommendations("cool").await.unwrap_err();
        assert!(matches!(err, AtelierError::Parse(_)));
        assert_eq!(recommender.name(), "canned");
    }
}
