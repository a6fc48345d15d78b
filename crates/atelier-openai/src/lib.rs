//! OpenAI-compatible chat-completion backend for Atelier.
//!
//! One adapter type covers Groq and any gateway that speaks the
//! `/chat/completions` envelope (the custom Telkom backend included); the
//! presets on [`OpenAiAdapterBuilder`] differ only in endpoint, auth scheme
//! and default model.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{DEFAULT_TIMEOUT, GROQ_BASE_URL, OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::AuthScheme;
pub mod api_v1;
mod client;
pub mod error;
