//! Lint output: diagnostics and the edits that fix them

use crate::types::{CommentKind, Position, Span};
use std::fmt;

/// The fixed set of messages a header check can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    MissingHeader,
    InvalidHeader,
    MissingNewLineAfter,
    SuperfluousNewLinesAfter,
    MissingNewLineBefore,
    SuperfluousNewLinesBefore,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::MissingHeader => "Missing license header",
            MessageKind::InvalidHeader => "Invalid license header",
            MessageKind::MissingNewLineAfter => "Missing new line after license header",
            MessageKind::SuperfluousNewLinesAfter => "Superfluous new lines after license header",
            MessageKind::MissingNewLineBefore => "Missing new line before license header",
            MessageKind::SuperfluousNewLinesBefore => "Superfluous new lines before license header",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a diagnostic points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Shebang,
    Line,
    Block,
    Statement,
    /// The file itself, used when it has no comments and no statements
    Program,
}

impl From<CommentKind> for AnchorKind {
    fn from(kind: CommentKind) -> Self {
        match kind {
            CommentKind::Block => AnchorKind::Block,
            CommentKind::Line => AnchorKind::Line,
            CommentKind::Shebang => AnchorKind::Shebang,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub kind: AnchorKind,
    pub position: Position,
}

impl Anchor {
    pub fn new(kind: AnchorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// A single text edit. Byte offsets refer to the text the diagnostic was computed on.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fix {
    Replace { span: Span, text: String },
    Insert { offset: usize, text: String },
    Delete { span: Span },
}

impl Fix {
    /// The range the edit overwrites; empty for insertions
    pub fn span(&self) -> Span {
        match self {
            Fix::Replace { span, .. } | Fix::Delete { span } => *span,
            Fix::Insert { offset, .. } => Span::new(*offset, *offset),
        }
    }

    pub fn replacement(&self) -> &str {
        match self {
            Fix::Replace { text, .. } | Fix::Insert { text, .. } => text,
            Fix::Delete { .. } => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    /// Name of the rule that produced the diagnostic
    pub rule: String,
    pub message: MessageKind,
    pub anchor: Anchor,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}  {}  [{}]",
            self.anchor.position.line, self.anchor.position.column, self.message, self.rule
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a fix's span never ends before it starts
        #[test]
        fn fix_span_is_ordered(start in 0usize..1000, len in 0usize..1000, text in "[a-z\n]{0,20}") {
            let fixes = [
                Fix::Replace { span: Span::new(start, start + len), text: text.clone() },
                Fix::Insert { offset: start, text },
                Fix::Delete { span: Span::new(start, start + len) },
            ];
            for fix in &fixes {
                prop_assert!(fix.span().start <= fix.span().end);
            }
        }
    }
}
