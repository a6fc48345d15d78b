use atelier::openai::OpenAiAdapterBuilder;
use atelier::{
    generic::{GenericMessage, GenericRole},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};

/// # Chat Completion – one raw call through the Groq adapter
///
/// Bypasses the recommendation layer and calls
/// [`ChatCompletionProvider::chat_complete`] directly, which is handy when
/// checking credentials or a model override.
///
/// ```bash
/// export GROQ_API_KEY=gsk_…      # mandatory
/// export GROQ_MODEL=llama-3.1-8b-instant   # optional
/// cargo run -p atelier --example groq_chat_complete
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OpenAiAdapterBuilder::groq_from_env().build()?;

    let messages = vec![
        GenericMessage::new(
            "You are a concise fashion stylist.".into(),
            GenericRole::System,
        ),
        GenericMessage::new(
            "Name three colors that pair well with navy.".into(),
            GenericRole::User,
        ),
    ];

    let response = backend
        .chat_complete(ChatCompleteParameters::new(messages).with_temperature(0.7))
        .await?;

    println!("Assistant: {}", response.content);
    if let Some(usage) = response.usage {
        println!("Tokens: {} prompt / {} completion", usage.prompt_tokens, usage.completion_tokens);
    }

    Ok(())
}
