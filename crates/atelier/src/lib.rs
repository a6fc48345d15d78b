//! # `atelier` – The umbrella crate
//!
//! One import for the storefront backend's recommendation and redirect logic.
//!
//! | Crate                  | What it provides                                                       |
//! |------------------------|------------------------------------------------------------------------|
//! | **`atelier-core`**     | Provider traits, fallback chain, response parsing, errors              |
//! | **`atelier-prompt`**   | Prompt builder and the stylist prompts for colors and styles           |
//! | **`atelier-redirect`** | Priority-ordered product-click redirect resolver                       |
//! | **`atelier-openai`**   | OpenAI-compatible chat backend (Groq, custom gateway) *(feature `openai`)* |
//! | **`atelier-gemini`**   | Gemini `generateContent` backend *(feature `gemini`)*                  |
//!
//! On top of those, this crate reads process configuration ([`config`]),
//! assembles the provider chain in its fixed order ([`factory`]) and exposes
//! the best-effort enrichment used by the prediction flow ([`service`]).
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use atelier::{
//!     RecommendationCategory,
//!     config::AtelierConfig,
//!     service::RecommendationService,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     atelier::telemetry::init_tracing();
//!
//!     let service = RecommendationService::from_config(&AtelierConfig::from_env()?);
//!     let styles = service
//!         .recommend(&RecommendationCategory::style("Hourglass")?)
//!         .await?;
//!     println!("{} suggested {:?}", styles.provider, styles.items);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod factory;
pub mod service;
pub mod telemetry;

pub use atelier_core::*;
pub use atelier_prompt as prompt;
pub use atelier_redirect as redirect;

#[cfg(feature = "gemini")]
pub use atelier_gemini as gemini;
#[cfg(feature = "openai")]
pub use atelier_openai as openai;
