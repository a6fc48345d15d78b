//! Prompts for color and style recommendations.
//!
//! Both prompts are pure functions of their label. They spell out the item
//! count, the closed style vocabulary and the exact JSON shape, because
//! `atelier_core::parse` decodes the answer strictly.

use atelier_core::{
    generic::{GenericMessage, GenericRole},
    recommendation::RecommendationKind,
    template::{IntoPrompt, PromptSource},
};

use crate::{builder::PromptBuilder, chain::PromptChain};

/// Number of colors requested per skin tone.
pub const COLOR_COUNT: usize = 15;

/// Inclusive range of clothing categories requested per body type.
pub const STYLE_COUNT_MIN: usize = 5;
pub const STYLE_COUNT_MAX: usize = 7;

/// The only clothing categories a style answer may contain.
pub const STYLE_VOCABULARY: [&str; 11] = [
    "T-Shirt",
    "Shirt",
    "Blouse",
    "Sweater",
    "Jacket",
    "Blazer",
    "Dress",
    "Skirt",
    "Jeans",
    "Trousers",
    "Shorts",
];

const SYSTEM_INSTRUCTION: &str = "You are a professional fashion stylist for an online clothing store. \
     You answer with a single JSON object and nothing else.";

/// Prompt asking for [`COLOR_COUNT`] flattering colors for `skin_tone`.
pub fn color_prompt(skin_tone: &str) -> String {
    PromptBuilder::new()
        .add_section_h2("Task")
        .add_line(format_args!(
            "Recommend exactly {COLOR_COUNT} clothing colors that flatter a person with a \"{skin_tone}\" skin tone."
        ))
        .add_line("Vary hue and depth so the palette works for everyday outfits.")
        .add_blank_line()
        .add_section_h2("Output format")
        .add_line("Respond ONLY with a JSON object in exactly this shape, without commentary:")
        .add_text_json(r##"{"colors": ["#RRGGBB", "#RRGGBB"]}"##)
        .add_line("Every entry must be a 6-digit hex color code starting with \"#\".")
        .finalize()
}

/// Prompt asking for 5–7 clothing categories from [`STYLE_VOCABULARY`] for
/// `body_type`.
pub fn style_prompt(body_type: &str) -> String {
    PromptBuilder::new()
        .add_section_h2("Task")
        .add_line(format_args!(
            "Recommend {STYLE_COUNT_MIN} to {STYLE_COUNT_MAX} clothing categories that best suit a \"{body_type}\" body type."
        ))
        .add_blank_line()
        .add_section_h2("Allowed categories")
        .add_bullets(STYLE_VOCABULARY)
        .add_line("Use only names from this list, spelled exactly as shown.")
        .add_blank_line()
        .add_section_h2("Output format")
        .add_line("Respond ONLY with a JSON object in exactly this shape, without commentary:")
        .add_text_json(r#"{"styles": ["Category", "Category"]}"#)
        .finalize()
}

/// Shared system message that precedes every recommendation prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInstruction;

impl IntoPrompt for SystemInstruction {
    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![GenericMessage::new(
            SYSTEM_INSTRUCTION.to_owned(),
            GenericRole::System,
        )]
    }
}

/// User message asking for colors.
#[derive(Debug, Clone, Copy)]
pub struct ColorPrompt<'a> {
    pub skin_tone: &'a str,
}

impl IntoPrompt for ColorPrompt<'_> {
    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![GenericMessage::new(
            color_prompt(self.skin_tone),
            GenericRole::User,
        )]
    }
}

/// User message asking for styles.
#[derive(Debug, Clone, Copy)]
pub struct StylePrompt<'a> {
    pub body_type: &'a str,
}

impl IntoPrompt for StylePrompt<'_> {
    fn into_prompt(self) -> Vec<GenericMessage> {
        vec![GenericMessage::new(
            style_prompt(self.body_type),
            GenericRole::User,
        )]
    }
}

/// The default [`PromptSource`]: system instruction followed by the color or
/// style request.
#[derive(Debug, Default, Clone, Copy)]
pub struct StylistPrompts;

impl PromptSource for StylistPrompts {
    fn render(&self, kind: RecommendationKind, label: &str) -> Vec<GenericMessage> {
        let chain = PromptChain::new().with(SystemInstruction);
        let chain = match kind {
            RecommendationKind::Color => chain.with(ColorPrompt { skin_tone: label }),
            RecommendationKind::Style => chain.with(StylePrompt { body_type: label }),
        };
        chain.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_prompt_is_deterministic_and_complete() {
        let prompt = color_prompt("Warm Olive");
        assert_eq!(prompt, color_prompt("Warm Olive"));
        assert!(prompt.contains("exactly 15 clothing colors"));
        assert!(prompt.contains("\"Warm Olive\" skin tone"));
        assert!(prompt.contains(r##"{"colors": ["#RRGGBB", "#RRGGBB"]}"##));
    }

    #[test]
    fn style_prompt_lists_the_whole_vocabulary() {
        let prompt = style_prompt("hourglass");
        assert!(prompt.contains("5 to 7 clothing categories"));
        for category in STYLE_VOCABULARY {
            assert!(prompt.contains(&format!("- {category}\n")), "missing {category}");
        }
        assert!(prompt.contains("{\"styles\": ["));
    }

    #[test]
    fn unknown_labels_still_render() {
        assert!(style_prompt("??").contains("\"??\" body type"));
    }

    #[test]
    fn stylist_prompts_put_system_first() {
        let messages = StylistPrompts.render(RecommendationKind::Style, "pear");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[1].role, GenericRole::User);
        assert_eq!(messages[1].content, style_prompt("pear"));
    }
}
