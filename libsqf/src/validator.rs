//! Structural validation pass.
//!
//! A second pass over the parsed sequence that checks each question for
//! completeness. Every question is checked independently and every violation
//! is reported, so one call surfaces the full set of problems; callers that
//! want a terse display (the bulk-import endpoint shows the first message
//! plus a remaining-count) truncate on their side.

use thiserror::Error;

use crate::question::ParsedQuestion;

/// A structural problem with one parsed question. The display strings are
/// the exact messages surfaced to question authors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The question body is empty or whitespace-only.
    #[error("Question {question}: Question text is missing.")]
    MissingText { question: usize },

    /// Fewer than two options have non-blank text.
    #[error("Question {question}: At least 2 options are required (found {found}).")]
    TooFewOptions { question: usize, found: usize },

    /// No non-blank option is marked correct.
    #[error("Question {question}: No correct answer is marked.")]
    NoCorrectAnswer { question: usize },
}

impl ValidationError {
    /// 1-based position of the offending question in the parsed sequence.
    pub fn question_number(&self) -> usize {
        match self {
            ValidationError::MissingText { question }
            | ValidationError::TooFewOptions { question, .. }
            | ValidationError::NoCorrectAnswer { question } => *question,
        }
    }
}

/// Check every question and collect every violation, in question order.
///
/// Returns an empty vector iff all questions are well-formed. Only options
/// with non-blank text count toward the two-option minimum, and the
/// missing-correct-answer check only applies once that minimum is met.
pub fn validate(questions: &[ParsedQuestion]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;

        if question.question_text.trim().is_empty() {
            errors.push(ValidationError::MissingText { question: number });
        }

        let valid_options: Vec<_> = question.valid_options().collect();
        if valid_options.len() < 2 {
            errors.push(ValidationError::TooFewOptions {
                question: number,
                found: valid_options.len(),
            });
        } else if !valid_options.iter().any(|o| o.is_correct) {
            errors.push(ValidationError::NoCorrectAnswer { question: number });
        }
    }

    errors
}

/// Like [`validate`], but with the errors rendered to their display strings.
pub fn validate_messages(questions: &[ParsedQuestion]) -> Vec<String> {
    validate(questions).iter().map(|e| e.to_string()).collect()
}
