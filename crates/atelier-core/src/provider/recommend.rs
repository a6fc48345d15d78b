use crate::{error::Result, recommendation::RecommendationKind};

use super::BoxFuture;

/// Anything that can produce color and style recommendations.
///
/// Implementations make at most one outbound call per invocation and return
/// either a non-empty list or an error; partial results are never surfaced.
pub trait RecommendationProvider: Send + Sync {
    fn name(&self) -> &str;

    /// `#RRGGBB` codes that suit `skin_tone`.
    fn generate_color_recommendations<'a>(
        &'a self,
        skin_tone: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>>>;

    /// Clothing categories that suit `body_type`.
    fn generate_style_recommendations<'a>(
        &'a self,
        body_type: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>>>;

    /// Dispatch to the generation method for `kind`.
    fn generate<'a>(
        &'a self,
        kind: RecommendationKind,
        label: &'a str,
    ) -> BoxFuture<'a, Result<Vec<String>>> {
        match kind {
            RecommendationKind::Color => self.generate_color_recommendations(label),
            RecommendationKind::Style => self.generate_style_recommendations(label),
        }
    }
}
