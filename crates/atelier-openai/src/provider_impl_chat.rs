use std::sync::Arc;

use atelier_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{BoxFuture, ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionRequest, ChatCompletionResponse, FinishReason, ResponseFormat},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn chat_complete<'a>(
        &'a self,
        params: ChatCompleteParameters,
    ) -> BoxFuture<'a, Result<GenericChatCompletionResponse>> {
        let client = Arc::clone(&self.client);
        let request = build_request(&self.model, self.json_mode, params);

        Box::pin(async move {
            let response = client.chat_completion(request).await?;
            Ok(into_generic(response)?)
        })
    }
}

fn build_request(
    model: &str,
    json_mode: bool,
    params: ChatCompleteParameters,
) -> ChatCompletionRequest {
    let mut request = ChatCompletionRequest::new(
        model.to_owned(),
        params.messages.into_iter().map(Into::into).collect(),
    );
    if let Some(temperature) = params.temperature {
        request = request.temperature(temperature);
    }
    if json_mode && params.json_output {
        request = request.response_format(ResponseFormat::json_object());
    }
    request
}

/// Take the first choice's text; anything else is a format error.
fn into_generic(
    response: ChatCompletionResponse,
) -> std::result::Result<GenericChatCompletionResponse, OpenAiError> {
    let usage = response.usage.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    });

    let Some(first_choice) = response.choices.into_iter().next() else {
        return Err(OpenAiError::Format("response has no choices".into()));
    };

    match first_choice.finish_reason {
        None | Some(FinishReason::Stop) | Some(FinishReason::Other) => {}
        Some(other) => {
            return Err(OpenAiError::Format(format!(
                "unhandled finish reason on API: {other:?}"
            )));
        }
    }

    match first_choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(GenericChatCompletionResponse {
            content,
            usage,
        }),
        _ => Err(OpenAiError::Format("first choice has no content".into())),
    }
}
