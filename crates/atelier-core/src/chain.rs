//! Ordered fallback across independently failing recommendation providers.
//!
//! ```text
//! ┌────────┐ fail ┌────────┐ fail ┌────────┐ fail
//! │ groq   │ ───► │ gemini │ ───► │ telkom │ ───► Exhausted { all failures }
//! └────────┘      └────────┘      └────────┘
//!     │ ok            │ ok            │ ok
//!     ▼               ▼               ▼
//!            ProviderResult (first success)
//! ```
//!
//! Providers are tried strictly in list order, one at a time, and each at
//! most once per invocation. List order encodes preference, so a faster
//! provider further down the list never wins over an earlier one.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    context::CallContext,
    error::{AtelierError, ProviderFailure, Result},
    provider::RecommendationProvider,
    recommendation::{ProviderResult, RecommendationCategory},
};

/// An immutable, ordered list of providers.
///
/// Cloning is cheap; providers are shared behind `Arc`.
#[derive(Clone, Default)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn RecommendationProvider>>,
}

impl FallbackChain {
    pub fn new(providers: Vec<Arc<dyn RecommendationProvider>>) -> Self {
        Self { providers }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Provider names in the order they are tried.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Return the first successful provider's result.
    ///
    /// # Errors
    ///
    /// * [`AtelierError::NoProviders`] – the chain is empty.
    /// * [`AtelierError::Exhausted`] – every provider failed; carries each
    ///   failure in the order the providers were tried.
    /// * [`AtelierError::Interrupted`] – `ctx` hit its deadline or was
    ///   cancelled before a provider succeeded.
    pub async fn generate(
        &self,
        category: &RecommendationCategory,
        ctx: &CallContext,
    ) -> Result<ProviderResult> {
        if self.providers.is_empty() {
            return Err(AtelierError::NoProviders);
        }

        let kind = category.kind();
        let label = category.label();
        let mut failures = Vec::new();

        for provider in &self.providers {
            if let Err(cause) = ctx.check() {
                return Err(AtelierError::Interrupted { cause, failures });
            }

            let outcome = match ctx.run(provider.generate(kind, label)).await {
                Ok(outcome) => outcome,
                Err(cause) => {
                    warn!(provider = provider.name(), %kind, %cause, "recommendation attempt interrupted");
                    return Err(AtelierError::Interrupted { cause, failures });
                }
            };

            match outcome {
                Ok(items) if !items.is_empty() => {
                    info!(
                        provider = provider.name(),
                        %kind,
                        items = items.len(),
                        failed_before = failures.len(),
                        "recommendations generated"
                    );
                    return Ok(ProviderResult::new(provider.name(), items));
                }
                Ok(_) => {
                    warn!(provider = provider.name(), %kind, "provider returned no items, trying next");
                    failures.push(ProviderFailure {
                        provider: provider.name().to_owned(),
                        error: AtelierError::EmptyRecommendations { field: kind.field() },
                    });
                }
                Err(error) => {
                    warn!(provider = provider.name(), %kind, %error, "provider failed, trying next");
                    failures.push(ProviderFailure {
                        provider: provider.name().to_owned(),
                        error,
                    });
                }
            }
        }

        Err(AtelierError::Exhausted { failures })
    }
}

impl std::fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackChain")
            .field("providers", &self.provider_names())
            .finish()
    }
}
