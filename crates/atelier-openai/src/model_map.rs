use std::borrow::Cow;

use atelier_core::model::{GroqModel, Model};

pub const LLAMA_3_3_70B_VERSATILE: &str = "llama-3.3-70b-versatile";
pub const LLAMA_3_1_8B_INSTANT: &str = "llama-3.1-8b-instant";

/// Model name sent on the wire, or `None` for models this backend cannot
/// serve.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(custom.clone()),
        Model::Groq(GroqModel::Llama3_3_70b) => Some(LLAMA_3_3_70B_VERSATILE.into()),
        Model::Groq(GroqModel::Llama3_1_8bInstant) => Some(LLAMA_3_1_8B_INSTANT.into()),
        Model::Gemini(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::model::GeminiModel;

    use super::*;

    #[test]
    fn maps_groq_and_custom_only() {
        assert_eq!(
            map_model(&GroqModel::Llama3_3_70b.into()).as_deref(),
            Some("llama-3.3-70b-versatile")
        );
        assert_eq!(
            map_model(&Model::custom("mixtral-8x7b")).as_deref(),
            Some("mixtral-8x7b")
        );
        assert_eq!(map_model(&GeminiModel::Gemini2_0Flash.into()), None);
    }
}
