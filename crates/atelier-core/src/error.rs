//! Unified error type exposed by **`atelier-core`**.
//!
//! Backend crates convert their transport errors into
//! [`AtelierError::Backend`] before bubbling them up to a
//! [`crate::ChatRecommender`], so the fallback chain only ever deals with one
//! error type regardless of which provider failed.

use std::fmt;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AtelierError>;

#[derive(Debug, Error)]
pub enum AtelierError {
    /// The model answered, but not with the JSON shape we asked for.
    #[error("could not parse model output: {0}")]
    Parse(#[source] serde_json::Error),

    /// The model answered with valid JSON whose expected list was missing or
    /// empty.
    #[error("no {field} returned")]
    EmptyRecommendations { field: &'static str },

    /// Generic forwarding of any backend-specific error (network, HTTP
    /// status, envelope format).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),

    /// The fallback chain was asked to run without any provider.
    #[error("no recommendation providers configured")]
    NoProviders,

    /// Every provider in the chain was tried once and failed.
    #[error("all {} recommendation providers failed; last error: {}", .failures.len(), last_failure(.failures))]
    Exhausted { failures: Vec<ProviderFailure> },

    /// The caller's deadline or cancellation stopped the chain early.
    #[error("recommendation chain {cause} after {} failed attempt(s)", .failures.len())]
    Interrupted {
        cause: Interruption,
        failures: Vec<ProviderFailure>,
    },
}

impl AtelierError {
    /// Provider failures collected before the error was raised.
    ///
    /// Empty for every variant that is not produced by the fallback chain.
    pub fn failures(&self) -> &[ProviderFailure] {
        match self {
            AtelierError::Exhausted { failures } | AtelierError::Interrupted { failures, .. } => {
                failures
            }
            _ => &[],
        }
    }
}

/// One failed provider attempt inside a fallback chain invocation.
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: String,
    pub error: AtelierError,
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.provider, self.error)
    }
}

/// Why a [`crate::CallContext`] stopped a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    DeadlineExceeded,
    Cancelled,
}

impl fmt::Display for Interruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interruption::DeadlineExceeded => write!(f, "exceeded its deadline"),
            Interruption::Cancelled => write!(f, "was cancelled"),
        }
    }
}

fn last_failure(failures: &[ProviderFailure]) -> String {
    failures
        .last()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none recorded".to_owned())
}
