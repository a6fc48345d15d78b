use std::sync::Arc;

use atelier_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{BoxFuture, ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    GeminiAdapter,
    api_v1beta::{GenerateContentRequest, GenerateContentResponse, GenerationConfig},
    error::GeminiError,
};

impl ChatCompletionProvider for GeminiAdapter {
    fn name(&self) -> &str {
        "gemini"
    }

    fn chat_complete<'a>(
        &'a self,
        params: ChatCompleteParameters,
    ) -> BoxFuture<'a, Result<GenericChatCompletionResponse>> {
        let client = Arc::clone(&self.client);
        let request = build_request(params);

        Box::pin(async move {
            let response = client.generate_content(&self.model, &request).await?;
            Ok(into_generic(response)?)
        })
    }
}

fn build_request(params: ChatCompleteParameters) -> GenerateContentRequest {
    let temperature = params.temperature;
    let json_output = params.json_output;
    let mut request = GenerateContentRequest::from_messages(params.messages);

    if temperature.is_some() || json_output {
        request.generation_config = Some(GenerationConfig {
            temperature,
            response_mime_type: json_output.then(|| "application/json".to_owned()),
        });
    }
    request
}

fn into_generic(
    response: GenerateContentResponse,
) -> std::result::Result<GenericChatCompletionResponse, GeminiError> {
    let usage = response.usage_metadata.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_token_count,
        completion_tokens: usage.candidates_token_count,
        total_tokens: usage.total_token_count,
    });

    let Some(candidate) = response.candidates.first() else {
        return Err(GeminiError::Format("response has no candidates".into()));
    };

    let content = candidate.text().ok_or_else(|| {
        GeminiError::Format(format!(
            "candidate has no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })?;

    Ok(GenericChatCompletionResponse { content, usage })
}
