//! Recommendation entry points used by the prediction flow.

use std::time::Duration;

use atelier_core::{
    CallContext, FallbackChain, ProviderResult, RecommendationCategory, error::Result,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{config::AtelierConfig, factory};

/// Classifier output a recommendation is keyed on. Either label may be
/// missing when the corresponding model did not run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub skin_tone: Option<String>,
    pub body_type: Option<String>,
}

/// Recommendations attached to a prediction. A part is `None` when it was
/// not requested or every provider failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enrichment {
    pub colors: Option<ProviderResult>,
    pub styles: Option<ProviderResult>,
}

#[derive(Debug)]
pub struct RecommendationService {
    chain: FallbackChain,
    deadline: Option<Duration>,
}

impl RecommendationService {
    pub fn new(chain: FallbackChain) -> Self {
        Self {
            chain,
            deadline: None,
        }
    }

    /// Bound every [`recommend`](Self::recommend) call by `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn from_config(config: &AtelierConfig) -> Self {
        Self {
            chain: factory::build_chain(config),
            deadline: config.recommendation_deadline,
        }
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    /// Run the chain under the configured overall deadline, if any.
    pub async fn recommend(&self, category: &RecommendationCategory) -> Result<ProviderResult> {
        let ctx = match self.deadline {
            Some(deadline) => CallContext::with_timeout(deadline),
            None => CallContext::unbounded(),
        };
        self.recommend_with(category, &ctx).await
    }

    pub async fn recommend_with(
        &self,
        category: &RecommendationCategory,
        ctx: &CallContext,
    ) -> Result<ProviderResult> {
        self.chain.generate(category, ctx).await
    }

    /// Best-effort enrichment of a prediction response. Never fails: a
    /// missing or blank label skips that part, and a chain error is logged
    /// and leaves it empty.
    pub async fn enrich(&self, prediction: &Prediction) -> Enrichment {
        let colors = match prediction.skin_tone.as_deref() {
            Some(skin_tone) => self.try_recommend(RecommendationCategory::color(skin_tone)).await,
            None => None,
        };
        let styles = match prediction.body_type.as_deref() {
            Some(body_type) => self.try_recommend(RecommendationCategory::style(body_type)).await,
            None => None,
        };

        Enrichment { colors, styles }
    }

    async fn try_recommend(
        &self,
        category: Result<RecommendationCategory>,
    ) -> Option<ProviderResult> {
        let category = match category {
            Ok(category) => category,
            Err(error) => {
                warn!(%error, "skipping recommendation for invalid label");
                return None;
            }
        };

        match self.recommend(&category).await {
            Ok(result) => Some(result),
            Err(error) => {
                warn!(
                    kind = %category.kind(),
                    label = category.label(),
                    %error,
                    "recommendations unavailable"
                );
                None
            }
        }
    }
}
