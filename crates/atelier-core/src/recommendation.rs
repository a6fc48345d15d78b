//! Request and result types for color/style recommendations.

use std::fmt;

use serde::Serialize;

use crate::error::{AtelierError, Result};

/// Which list a recommendation request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Clothing colors, keyed by skin-tone name. Items are `#RRGGBB` codes.
    Color,
    /// Clothing categories, keyed by body-type class.
    Style,
}

impl RecommendationKind {
    /// JSON field the model is asked to fill for this kind.
    pub fn field(self) -> &'static str {
        match self {
            RecommendationKind::Color => "colors",
            RecommendationKind::Style => "styles",
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationKind::Color => write!(f, "color"),
            RecommendationKind::Style => write!(f, "style"),
        }
    }
}

/// A classifier label paired with the kind of recommendation wanted for it.
///
/// Unknown labels are accepted as-is; only blank labels are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCategory {
    kind: RecommendationKind,
    label: String,
}

impl RecommendationCategory {
    pub fn new(kind: RecommendationKind, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(AtelierError::Invalid(format!(
                "{kind} recommendation category must not be empty"
            )));
        }

        Ok(Self {
            kind,
            label: trimmed.to_owned(),
        })
    }

    /// Color recommendations for a skin-tone name.
    pub fn color(skin_tone: impl Into<String>) -> Result<Self> {
        Self::new(RecommendationKind::Color, skin_tone)
    }

    /// Style recommendations for a body-type class.
    pub fn style(body_type: impl Into<String>) -> Result<Self> {
        Self::new(RecommendationKind::Style, body_type)
    }

    pub fn kind(&self) -> RecommendationKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Successful output of one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderResult {
    pub provider: String,
    pub items: Vec<String>,
}

impl ProviderResult {
    pub fn new(provider: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            provider: provider.into(),
            items,
        }
    }
}

/// Clean up the raw list a model produced.
///
/// Entries are trimmed and blanks dropped. Colors are canonicalised to
/// upper-case `#RRGGBB`; entries that are not hex colors are discarded.
/// An empty result is an error, never a successful empty list.
pub fn normalize_items(kind: RecommendationKind, items: Vec<String>) -> Result<Vec<String>> {
    let cleaned: Vec<String> = items
        .into_iter()
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return None;
            }
            match kind {
                RecommendationKind::Color => normalize_hex_color(item),
                RecommendationKind::Style => Some(item.to_owned()),
            }
        })
        .collect();

    if cleaned.is_empty() {
        return Err(AtelierError::EmptyRecommendations { field: kind.field() });
    }
    Ok(cleaned)
}

fn normalize_hex_color(raw: &str) -> Option<String> {
    let digits = raw.strip_prefix('#').unwrap_or(raw);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digits = match digits.len() {
        6 => digits.to_ascii_uppercase(),
        3 => digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>()
            .to_ascii_uppercase(),
        _ => return None,
    };
    Some(format!("#{digits}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_category_is_rejected() {
        assert!(RecommendationCategory::color("   ").is_err());
        let cat = RecommendationCategory::style(" Hourglass ").unwrap();
        assert_eq!(cat.label(), "Hourglass");
        assert_eq!(cat.kind(), RecommendationKind::Style);
    }

    #[test]
    fn unknown_labels_are_kept() {
        let cat = RecommendationCategory::color("definitely-not-a-skin-tone").unwrap();
        assert_eq!(cat.label(), "definitely-not-a-skin-tone");
    }

    #[test]
    fn colors_are_canonicalised() {
        let items = vec![
            "#a1b2c3".to_owned(),
            "FFF".to_owned(),
            "navy".to_owned(),
            "  ".to_owned(),
            "#12345".to_owned(),
        ];
        let out = normalize_items(RecommendationKind::Color, items).unwrap();
        assert_eq!(out, vec!["#A1B2C3", "#FFFFFF"]);
    }

    #[test]
    fn styles_are_trimmed_not_filtered() {
        let items = vec![" Blazer ".to_owned(), "".to_owned(), "Ponchos".to_owned()];
        let out = normalize_items(RecommendationKind::Style, items).unwrap();
        assert_eq!(out, vec!["Blazer", "Ponchos"]);
    }

    #[test]
    fn nothing_left_is_an_error() {
        let err = normalize_items(RecommendationKind::Color, vec!["teal".into()]).unwrap_err();
        assert_eq!(err.to_string(), "no colors returned");
    }
}
