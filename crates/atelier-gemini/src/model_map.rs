use std::borrow::Cow;

use atelier_core::model::{GeminiModel, Model};

pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(custom.clone()),
        Model::Gemini(GeminiModel::Gemini2_0Flash) => Some(GEMINI_2_0_FLASH.into()),
        Model::Gemini(GeminiModel::Gemini2_5Flash) => Some(GEMINI_2_5_FLASH.into()),
        Model::Groq(_) => None,
    }
}
