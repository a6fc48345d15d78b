//! End-to-end recommendation flow with scripted chat backends in place of
//! the network.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use atelier::{
    AtelierError, ChatRecommender, FallbackChain, RecommendationCategory,
    error::Result,
    generic::{GenericChatCompletionResponse, GenericRole},
    prompt::{STYLE_VOCABULARY, StylistPrompts},
    provider::{BoxFuture, ChatCompleteParameters, ChatCompletionProvider, RecommendationProvider},
    service::{Enrichment, Prediction, RecommendationService},
};

/// Replies with a fixed body, or fails when `reply` is `None`.
#[derive(Clone)]
struct Scripted {
    name: &'static str,
    reply: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl Scripted {
    fn replying(name: &'static str, reply: impl Into<String>) -> Self {
        Self {
            name,
            reply: Some(reply.into()),
            calls: Arc::default(),
        }
    }

    fn failing(name: &'static str) -> Self {
        Self {
            name,
            reply: None,
            calls: Arc::default(),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChatCompletionProvider for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn chat_complete<'a>(
        &'a self,
        params: ChatCompleteParameters,
    ) -> BoxFuture<'a, Result<GenericChatCompletionResponse>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(params.json_output);
            assert_eq!(params.messages.last().map(|m| m.role), Some(GenericRole::User));

            match &self.reply {
                Some(content) => Ok(GenericChatCompletionResponse {
                    content: content.clone(),
                    usage: None,
                }),
                None => Err(AtelierError::Invalid(format!("{} is down", self.name))),
            }
        })
    }
}

fn recommender(backend: &Scripted) -> Arc<dyn RecommendationProvider> {
    Arc::new(ChatRecommender::new(backend.clone(), StylistPrompts))
}

#[tokio::test]
async fn style_list_survives_fenced_reply() {
    let styles: Vec<String> = STYLE_VOCABULARY[..6].iter().map(|s| s.to_string()).collect();
    let body = format!("```json\n{}\n```", serde_json::json!({ "styles": styles }));
    let groq = Scripted::replying("groq", body);
    let chain = FallbackChain::new(vec![recommender(&groq)]);

    let result = RecommendationService::new(chain)
        .recommend(&RecommendationCategory::style("Hourglass").unwrap())
        .await
        .unwrap();

    assert_eq!(result.provider, "groq");
    assert_eq!(result.items, styles);
}

#[tokio::test]
async fn falls_through_to_next_backend() {
    let groq = Scripted::failing("groq");
    let gemini = Scripted::replying("gemini", r##"{"colors": ["#1a2b3c", "fff"]}"##);
    let telkom = Scripted::replying("telkom", r##"{"colors": ["#000000"]}"##);
    let chain = FallbackChain::new(vec![
        recommender(&groq),
        recommender(&gemini),
        recommender(&telkom),
    ]);

    let result = RecommendationService::new(chain)
        .recommend(&RecommendationCategory::color("Olive").unwrap())
        .await
        .unwrap();

    assert_eq!(result.provider, "gemini");
    assert_eq!(result.items, vec!["#1A2B3C", "#FFFFFF"]);
    assert_eq!(groq.calls(), 1);
    assert_eq!(telkom.calls(), 0);
}

#[tokio::test]
async fn unparseable_and_wrong_field_replies_are_failures() {
    let groq = Scripted::replying("groq", "Sure! Here are some colors: navy, olive.");
    let gemini = Scripted::replying("gemini", r#"{"styles": ["Dress"]}"#);
    let chain = FallbackChain::new(vec![recommender(&groq), recommender(&gemini)]);

    let err = RecommendationService::new(chain)
        .recommend(&RecommendationCategory::color("Fair").unwrap())
        .await
        .unwrap_err();

    let providers: Vec<&str> = err.failures().iter().map(|f| f.provider.as_str()).collect();
    assert_eq!(providers, vec!["groq", "gemini"]);
    assert!(matches!(err.failures()[0].error, AtelierError::Parse(_)));
    assert!(err.to_string().contains("`gemini`"));
}

#[tokio::test]
async fn enrichment_is_partial_when_everything_fails() {
    let chain = FallbackChain::new(vec![recommender(&Scripted::failing("groq"))]);
    let enrichment = RecommendationService::new(chain)
        .enrich(&Prediction {
            skin_tone: Some("Medium".into()),
            body_type: Some("Pear".into()),
        })
        .await;

    assert_eq!(enrichment, Enrichment::default());
    assert_eq!(
        serde_json::to_value(&enrichment).unwrap(),
        serde_json::json!({ "colors": null, "styles": null })
    );
}
