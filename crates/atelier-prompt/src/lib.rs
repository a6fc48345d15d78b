//! Prompt construction for Atelier recommendations.
//!
//! * [`builder::PromptBuilder`] – fluent markdown rendering.
//! * [`chain::PromptChain`] – ordered composition of prompt fragments.
//! * [`recommendation`] – the color/style prompts and the style vocabulary.
pub mod builder;
pub mod chain;
pub mod recommendation;

pub use recommendation::{STYLE_VOCABULARY, StylistPrompts, color_prompt, style_prompt};
