//! Phase 2: Question assembly
//!
//! The parser folds the classified line stream into question records. Parse
//! state is explicit: the question under construction, which multi-line
//! section (if any) is open, and the buffered lines of that section.
//! Committing a section joins its buffer with `\n` and trims the result.
//!
//! Parsing is infallible. Malformed tag values fall back to defaults, and
//! content outside any open section is discarded, so authoring mistakes
//! degrade the import rather than aborting it. Structural problems are the
//! validator's business, not the parser's.
//!
//! Known format limitations, preserved deliberately:
//! - There is no escape mechanism. A body line that itself starts with a
//!   recognized `[TAG]` keyword or with `---` is taken as a tag or comment.
//! - `[OPT]` correctness uses substring containment of `isCorrect:`, so an
//!   option text containing that literal substring is misread as a marker.

use crate::question::{ParsedOption, ParsedQuestion, QuestionType};
use crate::scanner::{scan, ScanLine, TagKind};

/// Which multi-line section is currently buffering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Question body, from `[TEXT]`.
    Text,
    /// Explanation body, from `[EXP]`.
    Explanation,
    /// Body of the most recently appended option, from a bare `[OPT]`.
    Option,
}

/// Parse state threaded through the line scan.
#[derive(Debug, Default)]
struct ScanState {
    current: Option<ParsedQuestion>,
    section: Option<Section>,
    buffer: Vec<String>,
}

impl ScanState {
    /// Close the open section, if any: join its buffered lines with `\n`,
    /// trim the outer edges, and store the result on the current question.
    fn commit_section(&mut self) {
        let section = self.section.take();
        let body = self.buffer.join("\n").trim().to_string();
        self.buffer.clear();

        let (Some(section), Some(question)) = (section, self.current.as_mut()) else {
            return;
        };

        match section {
            Section::Text => question.question_text = body,
            Section::Explanation => {
                question.explanation = if body.is_empty() { None } else { Some(body) };
            }
            Section::Option => {
                // Only fill an option that was left without inline text; a
                // text supplied on the [OPT] line itself wins.
                if let Some(option) = question.options.last_mut() {
                    if option.option_text.is_empty() {
                        option.option_text = body;
                    }
                }
            }
        }
    }

    /// Flush the question under construction into `out`, committing its open
    /// section first.
    fn flush(&mut self, out: &mut Vec<ParsedQuestion>) {
        self.commit_section();
        if let Some(question) = self.current.take() {
            out.push(question);
        }
    }

    fn handle_tag(&mut self, kind: TagKind, rest: &str, out: &mut Vec<ParsedQuestion>) {
        if kind == TagKind::Text {
            self.flush(out);
            self.current = Some(ParsedQuestion::default());
            self.section = Some(Section::Text);
            if !rest.is_empty() {
                self.buffer.push(rest.to_string());
            }
            return;
        }

        // Every other tag closes the open section, then mutates the current
        // question. Tags seen before any [TEXT] are silently ignored.
        self.commit_section();
        let Some(question) = self.current.as_mut() else {
            return;
        };

        match kind {
            TagKind::Text => unreachable!("handled above"),
            TagKind::Type => question.question_type = QuestionType::from_tag_value(rest),
            TagKind::Points => {
                // Non-numeric values are a no-op; the default stands.
                if let Ok(points) = rest.parse::<i64>() {
                    question.points = points;
                }
            }
            TagKind::Shuffle => question.shuffle_options = rest.eq_ignore_ascii_case("true"),
            TagKind::Opt => {
                let (text, is_correct) = split_option_body(rest);
                let inline = !text.is_empty();
                question.options.push(ParsedOption {
                    option_text: text,
                    is_correct,
                });
                // No inline text: open a section so following lines become
                // this option's text.
                if !inline {
                    self.section = Some(Section::Option);
                }
            }
            TagKind::Exp => {
                self.section = Some(Section::Explanation);
                if !rest.is_empty() {
                    self.buffer.push(rest.to_string());
                }
            }
        }
    }

    fn handle_content(&mut self, raw: String) {
        // Content only means something inside an open section; stray lines
        // (before any [TEXT], or after an inline [OPT]) are discarded.
        if self.current.is_some() && self.section.is_some() {
            self.buffer.push(raw);
        }
    }
}

/// Split an `[OPT]` tag body into (text, correctness).
///
/// When the body carries an `isCorrect:` marker, the text is whatever
/// precedes the first `|` (empty when there is no `|`), and correctness is
/// true exactly when `isCorrect:true` appears anywhere in the body. Without
/// a marker the whole body is the text and correctness defaults to false.
fn split_option_body(body: &str) -> (String, bool) {
    if body.contains("isCorrect:") {
        let text = match body.split_once('|') {
            Some((before, _)) => before.trim().to_string(),
            None => String::new(),
        };
        (text, body.contains("isCorrect:true"))
    } else {
        (body.to_string(), false)
    }
}

/// Parse an SQF document into its question records, in source order.
///
/// Never fails: empty or tag-less input yields an empty vector, and
/// malformed tag values degrade to field defaults. Structural completeness
/// is checked separately by [`crate::validate`].
pub fn parse(content: &str) -> Vec<ParsedQuestion> {
    let mut out = Vec::new();
    let mut state = ScanState::default();

    for line in scan(content) {
        match line {
            ScanLine::Comment => {}
            ScanLine::Tag { kind, rest } => state.handle_tag(kind, &rest, &mut out),
            ScanLine::Content(raw) => state.handle_content(raw),
        }
    }

    // The final question is only ever emitted here.
    state.flush(&mut out);
    out
}
