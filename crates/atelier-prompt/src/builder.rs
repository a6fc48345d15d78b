//! Builder-style helper for constructing **Markdown prompts**.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use atelier_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_section_h2("Task")
//!     .add_line("Pick three colors.")
//!     .add_blank_line()
//!     .add_bullet("Navy")
//!     .finalize();
//!
//! assert_eq!(md, "## Task\nPick three colors.\n\n- Navy\n");
//! ```
//!
//! The builder performs no validation and no smart formatting: newlines and
//! whitespace are emitted exactly as requested, so the same input always
//! renders the same prompt.

use std::fmt::Display;

/// Fluent helper to produce markdown fragments.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(self, line: impl Display) -> Self {
        self.add_line(format_args!("## {line}"))
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add a `- item` list entry.
    pub fn add_bullet(self, item: impl Display) -> Self {
        self.add_line(format_args!("- {item}"))
    }

    /// Add one bullet per item.
    pub fn add_bullets<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        items.into_iter().fold(self, |builder, item| builder.add_bullet(item))
    }

    /// Embed a code block fenced as `json`.
    pub fn add_text_json(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
