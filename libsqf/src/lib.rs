//! SQF question-bank parser implementation.
//!
//! SQF is a line-oriented, tag-delimited plain-text format for bulk-authoring
//! computer-based-test questions outside a web UI. A document is a sequence
//! of `[TEXT]` blocks, each optionally followed by `[TYPE]`, `[POINTS]`,
//! `[SHUFFLE]`, `[OPT]`, and `[EXP]` tags; `---` lines are comments.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Scanner**: Classifies each physical line as a comment, a recognized
//!    tag (keyword split from remainder), or verbatim content.
//!
//! 2. **Parser**: Folds the classified lines through explicit scan state
//!    (current question, open section, line buffer) into question records.
//!
//! Parsing never fails; malformed tag values degrade to defaults. Structural
//! completeness (question text present, at least two options, a marked
//! correct answer) is a separate pass, [`validate`], which reports every
//! violation rather than stopping at the first.
//!
//! The format has no escape mechanism: body text whose line starts with a
//! recognized `[TAG]` keyword or with `---` is taken as a tag or comment.

mod encode;
mod parser;
mod question;
mod scanner;
mod validator;

pub use encode::encode;
pub use parser::parse;
pub use question::{ParsedOption, ParsedQuestion, QuestionType};
pub use validator::{validate, validate_messages, ValidationError};
