//! Provider-agnostic building blocks for Atelier's style recommendations.
//!
//! * [`provider`] – transport and recommendation traits every backend plugs into.
//! * [`ChatRecommender`] – prompt ▶ chat call ▶ parsed, normalised list.
//! * [`FallbackChain`] – ordered, first-success-wins iteration over providers.
//! * [`CallContext`] – overall deadline and cancellation for one chain call.
pub mod chain;
pub mod client;
pub mod context;
pub mod error;
pub mod generic;
pub mod model;
pub mod parse;
pub mod provider;
pub mod recommendation;
pub mod template;

pub use chain::FallbackChain;
pub use client::ChatRecommender;
pub use context::{CallContext, CancelHandle};
pub use error::{AtelierError, Result};
pub use recommendation::{ProviderResult, RecommendationCategory, RecommendationKind};
