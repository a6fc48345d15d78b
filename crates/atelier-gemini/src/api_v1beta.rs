//! Wire structs for the `models/{model}:generateContent` endpoint.
//!
//! Gemini only knows the conversation roles `user` and `model`; system
//! messages travel separately as `systemInstruction`.

use atelier_core::generic::{GenericMessage, GenericRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Split generic messages into `systemInstruction` and `contents`.
    ///
    /// Several system messages are joined with a blank line.
    pub fn from_messages(messages: Vec<GenericMessage>) -> Self {
        let mut system = Vec::new();
        let mut contents = Vec::new();

        for message in messages {
            match message.role {
                GenericRole::System => system.push(message.content),
                GenericRole::User => contents.push(Content::text(Some(Role::User), message.content)),
                GenericRole::Assistant => {
                    contents.push(Content::text(Some(Role::Model), message.content))
                }
            }
        }

        Self {
            contents,
            system_instruction: (!system.is_empty())
                .then(|| Content::text(None, system.join("\n\n"))),
            generation_config: None,
        }
    }
}

#[derive(Debug, Serialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: Option<Role>, text: String) -> Self {
        Self {
            role,
            parts: vec![Part { text: Some(text) }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl Candidate {
    /// All text parts concatenated, or `None` when there is no text at all.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: i64,
    #[serde(default)]
    pub candidates_token_count: i64,
    #[serde(default)]
    pub total_token_count: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn system_messages_become_instruction() {
        let mut request = GenerateContentRequest::from_messages(vec![
            GenericMessage::new("be a stylist".into(), GenericRole::System),
            GenericMessage::new("colors for olive".into(), GenericRole::User),
        ]);
        request.generation_config = Some(GenerationConfig {
            temperature: None,
            response_mime_type: Some("application/json".into()),
        });

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{"role": "user", "parts": [{"text": "colors for olive"}]}],
                "systemInstruction": {"parts": [{"text": "be a stylist"}]},
                "generationConfig": {"responseMimeType": "application/json"}
            })
        );
    }

    #[test]
    fn assistant_maps_to_model_role() {
        let request = GenerateContentRequest::from_messages(vec![GenericMessage::new(
            "earlier answer".into(),
            GenericRole::Assistant,
        )]);
        assert_eq!(request.contents[0].role, Some(Role::Model));
        assert!(request.system_instruction.is_none());
    }

    #[test]
    fn candidate_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"styles\": "}, {"text": "[\"Dress\"]}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4, "totalTokenCount": 7}
        }))
        .unwrap();

        assert_eq!(
            response.candidates[0].text().as_deref(),
            Some("{\"styles\": [\"Dress\"]}")
        );
        assert_eq!(response.usage_metadata.unwrap().total_token_count, 7);
    }

    #[test]
    fn blocked_candidate_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert_eq!(response.candidates[0].text(), None);
    }
}
