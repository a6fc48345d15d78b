//! Gemini backend for Atelier.
//!
//! Speaks Gemini's native `generateContent` API rather than an
//! OpenAI-compatible shim: system messages become `systemInstruction`,
//! assistant turns use the `model` role, and the key is sent in the
//! `x-goog-api-key` header.
mod adapter;
mod client;
mod model_map;
mod provider_impl_chat;

pub mod api_v1beta;
pub mod error;

pub use adapter::{DEFAULT_TIMEOUT, GEMINI_BASE_URL, GeminiAdapter, GeminiAdapterBuilder};
