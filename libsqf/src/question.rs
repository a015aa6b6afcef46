//! Parsed question representation.
//!
//! These structures are the parser's output and double as the wire shape of
//! the bulk-import and manual-creation endpoints, which exchange the same
//! records as camelCase JSON.

use serde::{Deserialize, Serialize};

/// Kind of question, set by the `[TYPE]` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Multiple choice (the default).
    Mcq,
    /// True/false.
    Boolean,
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Mcq
    }
}

impl QuestionType {
    /// Interpret a `[TYPE]` tag value. Only a case-insensitive `boolean`
    /// selects `Boolean`; anything else falls back to `Mcq`.
    pub fn from_tag_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("boolean") {
            QuestionType::Boolean
        } else {
            QuestionType::Mcq
        }
    }
}

/// A single answer option within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOption {
    /// Display text. The validator rejects options left blank.
    pub option_text: String,
    /// Whether this option is a correct answer.
    #[serde(default)]
    pub is_correct: bool,
}

impl ParsedOption {
    /// An option with the given text, not marked correct.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            option_text: text.into(),
            is_correct: false,
        }
    }
}

/// One question record, produced per `[TEXT]` block in the source.
///
/// Option order is significant: it is preserved from the source text and
/// becomes the on-screen answer order (`order_index`) downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    /// Question body, multi-line sections joined with `\n` and trimmed.
    pub question_text: String,
    /// Question kind, `Mcq` unless `[TYPE] boolean` says otherwise.
    #[serde(default)]
    pub question_type: QuestionType,
    /// Point value, 1 unless `[POINTS]` supplies a parseable integer.
    #[serde(default = "default_points")]
    pub points: i64,
    /// Optional explanation shown after answering; `None` when the `[EXP]`
    /// block is absent or empty after trimming.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Whether options should be shuffled on screen.
    #[serde(default)]
    pub shuffle_options: bool,
    /// Answer options in source order.
    pub options: Vec<ParsedOption>,
}

fn default_points() -> i64 {
    1
}

impl Default for ParsedQuestion {
    fn default() -> Self {
        Self {
            question_text: String::new(),
            question_type: QuestionType::default(),
            points: 1,
            explanation: None,
            shuffle_options: false,
            options: Vec::new(),
        }
    }
}

impl ParsedQuestion {
    /// Options whose text is non-blank after trimming. The validator counts
    /// only these toward the two-option minimum.
    pub fn valid_options(&self) -> impl Iterator<Item = &ParsedOption> {
        self.options.iter().filter(|o| !o.option_text.trim().is_empty())
    }
}
