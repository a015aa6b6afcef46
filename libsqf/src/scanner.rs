//! Phase 1: Scanner
//!
//! The scanner classifies each physical line of an SQF document. It performs:
//! - Comment filtering (lines whose trimmed content starts with `---`)
//! - Tag recognition (the six case-sensitive bracket keywords)
//! - Keyword/remainder splitting for tag lines
//!
//! Classification never fails; a line that is neither a comment nor a
//! recognized tag is plain content, carried verbatim so section bodies keep
//! their interior blank lines.

/// The closed set of recognized SQF tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `[TEXT]` - starts a new question.
    Text,
    /// `[TYPE]` - sets the question type.
    Type,
    /// `[POINTS]` - sets the point value.
    Points,
    /// `[SHUFFLE]` - sets the shuffle flag.
    Shuffle,
    /// `[OPT]` - appends an answer option.
    Opt,
    /// `[EXP]` - starts the explanation section.
    Exp,
}

impl TagKind {
    /// The literal bracket keyword, as it appears in source.
    pub fn keyword(self) -> &'static str {
        match self {
            TagKind::Text => "[TEXT]",
            TagKind::Type => "[TYPE]",
            TagKind::Points => "[POINTS]",
            TagKind::Shuffle => "[SHUFFLE]",
            TagKind::Opt => "[OPT]",
            TagKind::Exp => "[EXP]",
        }
    }
}

/// Tags in match order. No keyword is a prefix of another, so order does not
/// affect the result.
const TAGS: [TagKind; 6] = [
    TagKind::Text,
    TagKind::Type,
    TagKind::Points,
    TagKind::Shuffle,
    TagKind::Opt,
    TagKind::Exp,
];

/// A single classified line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanLine {
    /// A `---` comment line, inert at any point in the document.
    Comment,
    /// A tag line: keyword plus the trimmed remainder of the line.
    Tag { kind: TagKind, rest: String },
    /// Anything else, verbatim. Blank lines appear here as empty strings.
    Content(String),
}

/// Classify one physical line.
///
/// Tag and comment recognition work on the trimmed line, so indented tags
/// are honored; content is returned untrimmed.
pub fn scan_line(line: &str) -> ScanLine {
    let trimmed = line.trim();

    if trimmed.starts_with("---") {
        return ScanLine::Comment;
    }

    for kind in TAGS {
        if let Some(rest) = trimmed.strip_prefix(kind.keyword()) {
            return ScanLine::Tag {
                kind,
                rest: rest.trim().to_string(),
            };
        }
    }

    ScanLine::Content(line.to_string())
}

/// Classify every line of a document, in order.
pub fn scan(source: &str) -> Vec<ScanLine> {
    source.split('\n').map(scan_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_tag_with_rest() {
        assert_eq!(
            scan_line("[TEXT] What is 2+2?"),
            ScanLine::Tag {
                kind: TagKind::Text,
                rest: "What is 2+2?".to_string()
            }
        );
    }

    #[test]
    fn test_scan_tag_without_rest() {
        assert_eq!(
            scan_line("[EXP]"),
            ScanLine::Tag {
                kind: TagKind::Exp,
                rest: String::new()
            }
        );
    }

    #[test]
    fn test_scan_indented_tag() {
        assert_eq!(
            scan_line("  [OPT] Paris"),
            ScanLine::Tag {
                kind: TagKind::Opt,
                rest: "Paris".to_string()
            }
        );
    }

    #[test]
    fn test_tag_keyword_is_case_sensitive() {
        assert_eq!(
            scan_line("[text] lowered"),
            ScanLine::Content("[text] lowered".to_string())
        );
    }

    #[test]
    fn test_scan_comment() {
        assert_eq!(scan_line("--- a comment"), ScanLine::Comment);
        assert_eq!(scan_line("   ---indented"), ScanLine::Comment);
        assert_eq!(scan_line("---"), ScanLine::Comment);
    }

    #[test]
    fn test_scan_content_and_blank() {
        assert_eq!(scan_line("London"), ScanLine::Content("London".to_string()));
        assert_eq!(scan_line(""), ScanLine::Content(String::new()));
    }

    #[test]
    fn test_unknown_bracket_word_is_content() {
        assert_eq!(
            scan_line("[HINT] not a tag"),
            ScanLine::Content("[HINT] not a tag".to_string())
        );
    }

    #[test]
    fn test_scan_splits_on_newline() {
        let lines = scan("[TEXT] a\n\n---x\nb");
        assert_eq!(lines.len(), 4);
        assert!(matches!(lines[0], ScanLine::Tag { kind: TagKind::Text, .. }));
        assert_eq!(lines[1], ScanLine::Content(String::new()));
        assert_eq!(lines[2], ScanLine::Comment);
        assert_eq!(lines[3], ScanLine::Content("b".to_string()));
    }
}
