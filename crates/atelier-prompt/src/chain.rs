//! Concatenates values implementing [`IntoPrompt`] into one message list.
//!
//! ```text
//! SystemInstruction ──► [system]
//! ColorPrompt       ──► [user]        PromptChain::build() ──► Vec<GenericMessage>
//! ```
//!
//! ```rust
//! use atelier_prompt::chain::PromptChain;
//! use atelier_core::generic::{GenericMessage, GenericRole};
//!
//! let messages = PromptChain::new()
//!     .with(GenericMessage::new("Be brief.".into(), GenericRole::System))
//!     .with(GenericMessage::new("Hi".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use atelier_core::{generic::GenericMessage, template::IntoPrompt};

/// Accumulates messages produced by [`IntoPrompt`] implementors, in order.
#[derive(Debug, Default)]
pub struct PromptChain(Vec<GenericMessage>);

impl PromptChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the messages produced by `fragment`.
    pub fn with(mut self, fragment: impl IntoPrompt) -> Self {
        self.0.extend(fragment.into_prompt());
        self
    }

    pub fn build(self) -> Vec<GenericMessage> {
        self.0
    }
}
