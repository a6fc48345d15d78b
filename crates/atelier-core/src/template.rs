//! Abstractions that turn a recommendation request into chat messages.
//!
//! Two traits are involved:
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptSource`] – renders the messages for a given
//!    [`RecommendationKind`] and category label. A [`crate::ChatRecommender`]
//!    owns one and consults it on every call.
//!
//! The concrete prompt texts live in `atelier-prompt`; keeping the seam here
//! lets backends and the chain stay independent of prompt wording.
//!
//! ```rust
//! use atelier_core::generic::{GenericMessage, GenericRole};
//! use atelier_core::recommendation::RecommendationKind;
//! use atelier_core::template::PromptSource;
//!
//! struct Terse;
//!
//! impl PromptSource for Terse {
//!     fn render(&self, kind: RecommendationKind, label: &str) -> Vec<GenericMessage> {
//!         vec![GenericMessage::new(format!("{kind} for {label}"), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(Terse.render(RecommendationKind::Style, "hourglass").len(), 1);
//! ```
use crate::{generic::GenericMessage, recommendation::RecommendationKind};

/// Converts a value into a series of chat messages.
pub trait IntoPrompt {
    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<GenericMessage>;
}

/// A single [`GenericMessage`] is a prompt on its own.
impl IntoPrompt for GenericMessage {
    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![self]
    }
}

/// Renders the chat messages for one recommendation request.
pub trait PromptSource: Send + Sync {
    fn render(&self, kind: RecommendationKind, label: &str) -> Vec<GenericMessage>;
}
