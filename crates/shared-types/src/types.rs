use std::ops::Range;
use std::path::PathBuf;

/// Line and column of a character, both 1-based. Columns count characters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// First character of a file
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open byte range into a file's text
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} after end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// `/* ... */`
    Block,
    /// `// ...`
    Line,
    /// `#!...` interpreter directive on the first line
    Shebang,
}

/// A comment or shebang that precedes the first statement of a file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Raw source text, delimiters included
    pub text: String,
    pub span: Span,
    pub start: Position,
    /// Position just past the last character
    pub end: Position,
}

impl Comment {
    pub fn is_shebang(&self) -> bool {
        self.kind == CommentKind::Shebang
    }
}

/// Start of the first token that is neither whitespace nor a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Statement {
    pub offset: usize,
    pub position: Position,
}

/// One source file as seen by lint rules
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SourceFile {
    pub path: Option<PathBuf>,
    pub text: String,
    /// Byte offset where content starts (past a byte-order mark)
    pub content_start: usize,
    /// Comments before the first statement, or all comments of a file without statements
    pub leading_comments: Vec<Comment>,
    pub first_statement: Option<Statement>,
    /// Set for component formats (Vue, Svelte) whose markup sits beside the script
    pub has_template_section: bool,
}

impl SourceFile {
    /// Name used in reports and logs
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<text>".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len_and_range() {
        let span = Span::new(3, 10);
        assert_eq!(span.len(), 7);
        assert!(!span.is_empty());
        assert_eq!(&"0123456789abc"[span.as_range()], "3456789");
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_positions_order_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 2));
        assert_eq!(Position::START, Position::new(1, 1));
    }

    #[test]
    fn test_comment_kind_serializes_snake_case() {
        let json = serde_json::to_string(&CommentKind::Shebang).unwrap();
        assert_eq!(json, "\"shebang\"");
    }

    #[test]
    fn test_display_name_falls_back_for_text_input() {
        let file = SourceFile {
            path: None,
            text: String::new(),
            content_start: 0,
            leading_comments: Vec::new(),
            first_statement: None,
            has_template_section: false,
        };
        assert_eq!(file.display_name(), "<text>");
    }
}
