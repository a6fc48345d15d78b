//! Generic message and role types shared by every backend crate.
//!
//! They mirror the concepts most chat APIs expose ("system", "user",
//! "assistant") and stay deliberately small: each backend converts them into
//! its own wire structs via `From`/`Into`, so prompt code never depends on a
//! particular provider.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any specific LLM provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use atelier_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a stylist.".into(), GenericRole::System);
    /// assert_eq!(sys.role.to_string(), "system");
    /// ```
    pub fn new(content: String, role: GenericRole) -> Self {
        Self { content, role }
    }
}

/// Chat roles recognised by every supported backend.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Global behaviour and output-format rules.
    System,
    /// Messages produced by the model.
    Assistant,
    /// The actual request.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Raw text returned by one chat completion round-trip.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub content: String,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
