//! Extracts the structured recommendation list from free-form model output.
//!
//! Models frequently wrap JSON in a markdown fence even when told not to, so
//! the raw text goes through [`strip_code_fence`] before a strict decode. A
//! decode failure is final: the text is never repaired or retried.

use serde::Deserialize;

use crate::{
    error::{AtelierError, Result},
    recommendation::RecommendationKind,
};

/// The JSON shape every prompt asks for. Only the field matching the request
/// kind is expected to be present.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct StructuredResponse {
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub styles: Option<Vec<String>>,
}

impl StructuredResponse {
    /// Take the list for `kind`. Absent or empty lists are an error.
    pub fn into_items(self, kind: RecommendationKind) -> Result<Vec<String>> {
        let items = match kind {
            RecommendationKind::Color => self.colors,
            RecommendationKind::Style => self.styles,
        };

        match items {
            Some(items) if !items.is_empty() => Ok(items),
            _ => Err(AtelierError::EmptyRecommendations { field: kind.field() }),
        }
    }
}

/// Remove surrounding whitespace and a markdown code fence (```` ```json ````
/// or bare ```` ``` ````). Stripping already clean text is a no-op.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Strip fences from `raw` and decode it strictly.
pub fn parse_response(raw: &str) -> Result<StructuredResponse> {
    serde_json::from_str(strip_code_fence(raw)).map_err(AtelierError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let raw = "\n```json\n{\"colors\": [\"#FFFFFF\"]}\n```  ";
        assert_eq!(strip_code_fence(raw), "{\"colors\": [\"#FFFFFF\"]}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"styles\": []}\n```";
        assert_eq!(strip_code_fence(raw), "{\"styles\": []}");
    }

    #[test]
    fn stripping_is_idempotent() {
        let clean = "{\"styles\": [\"Jeans\"]}";
        assert_eq!(strip_code_fence(clean), clean);

        let once = strip_code_fence("```json\n{\"styles\": [\"Jeans\"]}\n```");
        assert_eq!(strip_code_fence(once), once);
    }

    #[test]
    fn parses_fenced_payload() {
        let parsed = parse_response("```json\n{\"styles\": [\"Dress\", \"Skirt\"]}\n```").unwrap();
        assert_eq!(
            parsed.into_items(RecommendationKind::Style).unwrap(),
            vec!["Dress", "Skirt"]
        );
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_response("Sure! Here are some colors: teal, navy").unwrap_err();
        assert!(matches!(err, AtelierError::Parse(_)));
    }

    #[test]
    fn wrong_field_is_empty() {
        let parsed = parse_response("{\"colors\": [\"#000000\"]}").unwrap();
        let err = parsed.into_items(RecommendationKind::Style).unwrap_err();
        assert!(matches!(
            err,
            AtelierError::EmptyRecommendations { field: "styles" }
        ));
    }

    #[test]
    fn empty_list_is_an_error() {
        let parsed = parse_response("{\"colors\": []}").unwrap();
        assert!(parsed.into_items(RecommendationKind::Color).is_err());
    }
}
