use atelier_core::generic::{GenericMessage, GenericRole};
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            response_format: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    response_format: ResponseFormat
);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResponseFormat {
    pub r#type: ResponseFormatType,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            r#type: ResponseFormatType::JsonObject,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormatType {
    JsonObject,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

/// Response envelope. Only `choices` is required; OpenAI-compatible
/// gateways differ in which of the remaining fields they send.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serialises_json_mode() {
        let request = ChatCompletionRequest::new(
            "llama-3.3-70b-versatile".into(),
            vec![GenericMessage::new("hi".into(), GenericRole::User).into()],
        )
        .temperature(0.7)
        .response_format(ResponseFormat::json_object());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.7,
                "response_format": {"type": "json_object"}
            })
        );
    }

    #[test]
    fn optional_fields_are_omitted() {
        let request = ChatCompletionRequest::new("m".into(), vec![]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"model": "m", "messages": []})
        );
    }

    #[test]
    fn decodes_minimal_gateway_response() {
        let body = json!({
            "choices": [{
                "message": {"role": "assistant", "content": "{\"styles\": [\"Jeans\"]}"},
                "finish_reason": "stop"
            }]
        });
        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert!(response.usage.is_none());
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
    }

    #[test]
    fn unknown_finish_reason_is_tolerated() {
        let body = json!({
            "id": "chatcmpl-1",
            "model": "llama",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": null},
                "finish_reason": "eos"
            }],
            "usage": {"prompt_tokens": 1, "completion_tokens": 2, "total_tokens": 3}
        });
        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Other));
        assert_eq!(response.choices[0].message.content, None);
        assert_eq!(response.usage.unwrap().total_tokens, 3);
    }
}
