//! Provider traits.
//!
//! * [`ChatCompletionProvider`] – the transport seam each backend crate
//!   implements (one request ▶ one text response).
//! * [`RecommendationProvider`] – the domain seam the fallback chain iterates.
//!
//! Both return boxed futures so they stay object-safe without pulling in
//! `async_trait`.
use std::{future::Future, pin::Pin};

mod chat_complete;
mod recommend;

pub use chat_complete::*;
pub use recommend::*;

/// Boxed, sendable future returned by every provider method.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
