//! Process configuration, read once at startup.
//!
//! A provider is configured only when its API key is present and not blank;
//! everything else has a default. Values come from the environment:
//!
//! | Variable                                 | Meaning                                  |
//! |------------------------------------------|------------------------------------------|
//! | `GROQ_API_KEY`, `GROQ_MODEL`, `GROQ_BASE_URL`       | Groq backend                  |
//! | `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL` | Gemini backend                |
//! | `TELKOM_API_KEY`, `TELKOM_MODEL`, `TELKOM_BASE_URL` | custom OpenAI-compatible gateway |
//! | `ATELIER_PROVIDER_TIMEOUT_SECS`          | per-call timeout, default 60             |
//! | `ATELIER_RECOMMENDATION_DEADLINE_SECS`   | overall chain deadline, unset = none     |
//! | `ATELIER_HOMEPAGE_URL`                   | redirect fallback                        |

use std::{env, time::Duration};

use atelier_redirect::{DEFAULT_HOMEPAGE_URL, RedirectResolver};

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{key}` must be a whole number of seconds, got `{value}`")]
    InvalidSeconds { key: &'static str, value: String },
}

/// Credentials and overrides for one backend.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtelierConfig {
    pub groq: Option<ProviderSettings>,
    pub gemini: Option<ProviderSettings>,
    pub telkom: Option<ProviderSettings>,
    pub provider_timeout: Duration,
    pub recommendation_deadline: Option<Duration>,
    pub homepage_url: String,
}

impl Default for AtelierConfig {
    fn default() -> Self {
        Self {
            groq: None,
            gemini: None,
            telkom: None,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            recommendation_deadline: None,
            homepage_url: DEFAULT_HOMEPAGE_URL.to_owned(),
        }
    }
}

impl AtelierConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let provider = |prefix: &str| {
            get(&format!("{prefix}_API_KEY")).map(|api_key| ProviderSettings {
                api_key,
                model: get(&format!("{prefix}_MODEL")),
                base_url: get(&format!("{prefix}_BASE_URL")),
            })
        };
        let seconds = |key: &'static str| -> Result<Option<Duration>, ConfigError> {
            get(key)
                .map(|value| {
                    value
                        .trim()
                        .parse::<u64>()
                        .map(Duration::from_secs)
                        .map_err(|_| ConfigError::InvalidSeconds { key, value })
                })
                .transpose()
        };

        Ok(Self {
            groq: provider("GROQ"),
            gemini: provider("GEMINI"),
            telkom: provider("TELKOM"),
            provider_timeout: seconds("ATELIER_PROVIDER_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_PROVIDER_TIMEOUT),
            recommendation_deadline: seconds("ATELIER_RECOMMENDATION_DEADLINE_SECS")?,
            homepage_url: get("ATELIER_HOMEPAGE_URL")
                .unwrap_or_else(|| DEFAULT_HOMEPAGE_URL.to_owned()),
        })
    }

    /// Click resolver falling back to the configured homepage.
    pub fn redirect_resolver(&self) -> RedirectResolver {
        RedirectResolver::new(self.homepage_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<AtelierConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AtelierConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]).unwrap(), AtelierConfig::default());
    }

    #[test]
    fn blank_key_excludes_provider() {
        let cfg = config(&[
            ("GROQ_API_KEY", "  "),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("GEMINI_API_KEY", "g-key"),
        ])
        .unwrap();

        assert!(cfg.groq.is_none());
        let gemini = cfg.gemini.unwrap();
        assert_eq!(gemini.api_key, "g-key");
        assert_eq!(gemini.model, None);
    }

    #[test]
    fn reads_overrides_and_durations() {
        let cfg = config(&[
            ("TELKOM_API_KEY", "t-key"),
            ("TELKOM_BASE_URL", "https://gateway.internal/v1"),
            ("TELKOM_MODEL", "telkom-llm"),
            ("ATELIER_PROVIDER_TIMEOUT_SECS", "15"),
            ("ATELIER_RECOMMENDATION_DEADLINE_SECS", "40"),
            ("ATELIER_HOMEPAGE_URL", "https://shop.example"),
        ])
        .unwrap();

        let telkom = cfg.telkom.unwrap();
        assert_eq!(telkom.base_url.as_deref(), Some("https://gateway.internal/v1"));
        assert_eq!(telkom.model.as_deref(), Some("telkom-llm"));
        assert_eq!(cfg.provider_timeout, Duration::from_secs(15));
        assert_eq!(cfg.recommendation_deadline, Some(Duration::from_secs(40)));
        assert_eq!(cfg.homepage_url, "https://shop.example");
    }

    #[test]
    fn resolver_uses_configured_homepage() {
        use atelier_redirect::{Brand, Product};

        let cfg = config(&[("ATELIER_HOMEPAGE_URL", "https://shop.example")]).unwrap();
        assert_eq!(
            cfg.redirect_resolver()
                .resolve_url(&Product::default(), &Brand::default()),
            "https://shop.example"
        );
        assert_eq!(
            AtelierConfig::default().redirect_resolver().homepage_url(),
            DEFAULT_HOMEPAGE_URL
        );
    }

    #[test]
    fn bad_number_is_reported() {
        let err = config(&[("ATELIER_PROVIDER_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`ATELIER_PROVIDER_TIMEOUT_SECS` must be a whole number of seconds, got `soon`"
        );
    }

    #[test]
    fn debug_redacts_key() {
        let settings = ProviderSettings {
            api_key: "secret".into(),
            model: None,
            base_url: None,
        };
        assert!(!format!("{settings:?}").contains("secret"));
    }
}
