//! Builds the provider chain from configuration.
//!
//! Order is fixed: Groq, then Gemini, then the custom gateway. A provider
//! without credentials is left out here, at startup, and never considered
//! again for the lifetime of the process.

use std::sync::Arc;

use atelier_core::{FallbackChain, provider::RecommendationProvider};
#[cfg(any(feature = "openai", feature = "gemini"))]
use atelier_core::{ChatRecommender, error::Result};
#[cfg(any(feature = "openai", feature = "gemini"))]
use atelier_prompt::StylistPrompts;
use tracing::{info, warn};

use crate::config::AtelierConfig;

/// Build every configured provider, skipping (and logging) the ones whose
/// settings are incomplete.
pub fn build_chain(config: &AtelierConfig) -> FallbackChain {
    let mut providers: Vec<Arc<dyn RecommendationProvider>> = Vec::new();

    #[cfg(feature = "openai")]
    if let Some(settings) = &config.groq {
        push_or_warn(&mut providers, "groq", groq(settings, config));
    }

    #[cfg(feature = "gemini")]
    if let Some(settings) = &config.gemini {
        push_or_warn(&mut providers, "gemini", gemini(settings, config));
    }

    #[cfg(feature = "openai")]
    if let Some(settings) = &config.telkom {
        push_or_warn(&mut providers, "telkom", telkom(settings, config));
    }

    let chain = FallbackChain::new(providers);
    if chain.is_empty() {
        warn!("no recommendation provider configured; recommendations are disabled");
    } else {
        info!(providers = ?chain.provider_names(), "recommendation chain ready");
    }
    chain
}

#[cfg(any(feature = "openai", feature = "gemini"))]
fn push_or_warn(
    providers: &mut Vec<Arc<dyn RecommendationProvider>>,
    name: &str,
    built: Result<Arc<dyn RecommendationProvider>>,
) {
    match built {
        Ok(provider) => providers.push(provider),
        Err(error) => warn!(provider = name, %error, "skipping recommendation provider"),
    }
}

#[cfg(feature = "openai")]
fn groq(
    settings: &crate::config::ProviderSettings,
    config: &AtelierConfig,
) -> Result<Arc<dyn RecommendationProvider>> {
    use atelier_core::model::Model;
    use atelier_openai::OpenAiAdapterBuilder;

    let mut builder = OpenAiAdapterBuilder::groq()
        .with_api_key(&settings.api_key)
        .with_timeout(config.provider_timeout);
    if let Some(model) = &settings.model {
        builder = builder.with_model(Model::custom(model.clone()));
    }
    if let Some(base_url) = &settings.base_url {
        builder = builder.with_base_url(base_url);
    }

    Ok(Arc::new(ChatRecommender::new(builder.build()?, StylistPrompts)))
}

#[cfg(feature = "gemini")]
fn gemini(
    settings: &crate::config::ProviderSettings,
    config: &AtelierConfig,
) -> Result<Arc<dyn RecommendationProvider>> {
    use atelier_core::model::Model;
    use atelier_gemini::GeminiAdapterBuilder;

    let mut builder = GeminiAdapterBuilder::new()
        .with_api_key(&settings.api_key)
        .with_timeout(config.provider_timeout);
    if let Some(model) = &settings.model {
        builder = builder.with_model(Model::custom(model.clone()));
    }
    if let Some(base_url) = &settings.base_url {
        builder = builder.with_base_url(base_url);
    }

    Ok(Arc::new(ChatRecommender::new(builder.build()?, StylistPrompts)))
}

/// Model used for the custom gateway when `TELKOM_MODEL` is unset.
#[cfg(feature = "openai")]
pub const DEFAULT_TELKOM_MODEL: &str = "telkom-llm";

#[cfg(feature = "openai")]
fn telkom(
    settings: &crate::config::ProviderSettings,
    config: &AtelierConfig,
) -> Result<Arc<dyn RecommendationProvider>> {
    use atelier_core::model::Model;
    use atelier_openai::OpenAiAdapterBuilder;

    let model = settings
        .model
        .clone()
        .unwrap_or_else(|| DEFAULT_TELKOM_MODEL.to_owned());
    let mut builder = OpenAiAdapterBuilder::telkom()
        .with_api_key(&settings.api_key)
        .with_model(Model::custom(model))
        .with_timeout(config.provider_timeout);
    if let Some(base_url) = &settings.base_url {
        builder = builder.with_base_url(base_url);
    }

    Ok(Arc::new(ChatRecommender::new(builder.build()?, StylistPrompts)))
}
