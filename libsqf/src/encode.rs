//! Encode question records back to canonical SQF text.
//!
//! The canonical form uses only the documented tag set, omits tags whose
//! values match the defaults, and separates questions with a blank line.
//! Re-parsing the output yields an equal sequence, except for text that
//! trips the format's documented limitations (lines starting with a tag
//! keyword or `---`, option text containing `|` or `isCorrect:`) - SQF has
//! no escape mechanism for those.

use crate::question::{ParsedQuestion, QuestionType};

/// Render a sequence of questions as canonical SQF.
pub fn encode(questions: &[ParsedQuestion]) -> String {
    let blocks: Vec<String> = questions.iter().map(encode_question).collect();
    let mut out = blocks.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn encode_question(question: &ParsedQuestion) -> String {
    let mut lines = Vec::new();

    push_section(&mut lines, "[TEXT]", &question.question_text);

    if question.question_type == QuestionType::Boolean {
        lines.push("[TYPE] boolean".to_string());
    }
    if question.points != 1 {
        lines.push(format!("[POINTS] {}", question.points));
    }
    if question.shuffle_options {
        lines.push("[SHUFFLE] true".to_string());
    }

    for option in &question.options {
        if option.option_text.contains('\n') {
            // Multi-line text cannot ride on the tag line; spell the
            // correctness marker out and let the section carry the body.
            lines.push(format!("[OPT] isCorrect:{}", option.is_correct));
            lines.extend(option.option_text.split('\n').map(String::from));
        } else if option.is_correct {
            lines.push(format!("[OPT] {}|isCorrect:true", option.option_text));
        } else {
            lines.push(format!("[OPT] {}", option.option_text));
        }
    }

    if let Some(explanation) = &question.explanation {
        push_section(&mut lines, "[EXP]", explanation);
    }

    lines.join("\n") + "\n"
}

/// Emit a tag with a possibly multi-line body: the first line rides on the
/// tag line, the rest follow as section content.
fn push_section(lines: &mut Vec<String>, tag: &str, body: &str) {
    let mut parts = body.split('\n');
    match parts.next() {
        Some(first) if !first.is_empty() => lines.push(format!("{} {}", tag, first)),
        _ => lines.push(tag.to_string()),
    }
    lines.extend(parts.map(String::from));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::question::ParsedOption;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_minimal_question() {
        let q = ParsedQuestion {
            question_text: "What is 2+2?".to_string(),
            options: vec![
                ParsedOption::new("3"),
                ParsedOption {
                    option_text: "4".to_string(),
                    is_correct: true,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            encode(&[q]),
            "[TEXT] What is 2+2?\n[OPT] 3\n[OPT] 4|isCorrect:true\n"
        );
    }

    #[test]
    fn test_encode_omits_default_tags() {
        let encoded = encode(&parse("[TEXT] q\n[TYPE] mcq\n[POINTS] 1\n[SHUFFLE] false"));
        assert_eq!(encoded, "[TEXT] q\n");
    }

    #[test]
    fn test_encode_non_default_tags() {
        let encoded = encode(&parse(
            "[TEXT] q\n[TYPE] boolean\n[POINTS] 3\n[SHUFFLE] true",
        ));
        assert_eq!(
            encoded,
            "[TEXT] q\n[TYPE] boolean\n[POINTS] 3\n[SHUFFLE] true\n"
        );
    }

    #[test]
    fn test_roundtrip() {
        let src = "\
[TEXT] First paragraph.

Second paragraph.
[POINTS] 2
[OPT] 3
[OPT] 4|isCorrect:true
[EXP] Basic
arithmetic.

[TEXT] The sky is blue.
[TYPE] boolean
[OPT] True|isCorrect:true
[OPT] False
";
        let questions = parse(src);
        assert_eq!(parse(&encode(&questions)), questions);
    }

    #[test]
    fn test_multiline_option_roundtrip() {
        let questions = parse("[TEXT] q\n[OPT] isCorrect:true\nline one\nline two\n[OPT] other");
        assert_eq!(questions[0].options[0].option_text, "line one\nline two");
        assert_eq!(parse(&encode(&questions)), questions);
    }
}
