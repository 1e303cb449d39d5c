//! License header rule
//!
//! Validates the presence, text and spacing of the license header comment and
//! offers a fix for every problem it reports. A header with the wrong text is
//! reported alone: spacing is only checked once the text is valid.

use super::LintRule;
use crate::locator::{locate, Candidate};
use crate::resolver::{ExpectedHeader, ResolvedHeader};
use shared_types::{
    Anchor, AnchorKind, Comment, Diagnostic, Fix, MessageKind, Position, SourceFile, Span,
};
use std::cmp::Ordering;

pub const RULE_NAME: &str = "license-header/header";

/// Line difference between two elements separated by exactly one blank line
const EXPECTED_GAP: usize = 2;

pub struct HeaderRule {
    header: ResolvedHeader,
}

impl HeaderRule {
    pub fn new(header: ResolvedHeader) -> Self {
        Self { header }
    }

    pub fn header(&self) -> &ResolvedHeader {
        &self.header
    }

    fn check_candidate(
        &self,
        file: &SourceFile,
        expected: &ExpectedHeader<'_>,
        candidate: Candidate,
    ) -> Vec<Diagnostic> {
        let comments = &file.leading_comments;
        let first = &comments[candidate.first];
        let last = &comments[candidate.last];
        let span = Span::new(first.span.start, last.span.end);
        let kind = AnchorKind::from(first.kind);

        if !expected.accepts(&file.text[span.as_range()]) {
            return vec![self.diagnostic(
                MessageKind::InvalidHeader,
                Anchor::new(kind, first.start),
                Fix::Replace {
                    span,
                    text: expected.canonical().to_string(),
                },
            )];
        }

        let mut diagnostics = Vec::new();

        let next = comments
            .get(candidate.last + 1)
            .map(|comment| (comment.span.start, comment.start.line))
            .or_else(|| {
                file.first_statement
                    .map(|statement| (statement.offset, statement.position.line))
            });
        if let Some((next_offset, next_line)) = next {
            let message = gap_message(
                next_line.saturating_sub(last.end.line),
                MessageKind::SuperfluousNewLinesAfter,
                MessageKind::MissingNewLineAfter,
            );
            if let Some(message) = message {
                diagnostics.push(self.diagnostic(
                    message,
                    Anchor::new(kind, last.end),
                    Fix::Replace {
                        span: Span::new(span.end, next_offset),
                        text: expected.separator(),
                    },
                ));
            }
        }

        let previous: Option<&Comment> = candidate
            .first
            .checked_sub(1)
            .and_then(|index| comments.get(index));
        match previous {
            Some(previous) => {
                let message = gap_message(
                    first.start.line.saturating_sub(previous.end.line),
                    MessageKind::SuperfluousNewLinesBefore,
                    MessageKind::MissingNewLineBefore,
                );
                if let Some(message) = message {
                    diagnostics.push(self.diagnostic(
                        message,
                        Anchor::new(kind, first.start),
                        Fix::Replace {
                            span: Span::new(previous.span.end, span.start),
                            text: expected.separator(),
                        },
                    ));
                }
            }
            None if first.start.line != 1 => {
                diagnostics.push(self.diagnostic(
                    MessageKind::SuperfluousNewLinesBefore,
                    Anchor::new(kind, first.start),
                    Fix::Delete {
                        span: Span::new(file.content_start, span.start),
                    },
                ));
            }
            None => {}
        }

        diagnostics
    }

    fn missing_header(
        &self,
        file: &SourceFile,
        expected: &ExpectedHeader<'_>,
        shebang: Option<&Comment>,
    ) -> Diagnostic {
        let first_comment = file.leading_comments.first();

        let anchor = match (shebang, first_comment, file.first_statement) {
            (Some(shebang), _, _) => Anchor::new(AnchorKind::Shebang, shebang.start),
            (None, Some(comment), _) => Anchor::new(comment.kind.into(), comment.start),
            (None, None, Some(statement)) => {
                Anchor::new(AnchorKind::Statement, statement.position)
            }
            (None, None, None) => Anchor::new(AnchorKind::Program, Position::START),
        };

        let fix = match shebang {
            Some(shebang) => Fix::Insert {
                offset: shebang.span.end,
                text: format!("{}{}", expected.separator(), expected.canonical()),
            },
            None => {
                let end = first_comment
                    .map(|comment| comment.span.start)
                    .or_else(|| file.first_statement.map(|statement| statement.offset))
                    .unwrap_or(file.text.len());
                Fix::Replace {
                    span: Span::new(file.content_start, end),
                    text: format!("{}{}", expected.canonical(), expected.separator()),
                }
            }
        };

        self.diagnostic(MessageKind::MissingHeader, anchor, fix)
    }

    fn diagnostic(&self, message: MessageKind, anchor: Anchor, fix: Fix) -> Diagnostic {
        Diagnostic {
            rule: RULE_NAME.to_string(),
            message,
            anchor,
            fix: Some(fix),
        }
    }
}

/// Message for a line gap that is not exactly one blank line
fn gap_message(gap: usize, superfluous: MessageKind, missing: MessageKind) -> Option<MessageKind> {
    match gap.cmp(&EXPECTED_GAP) {
        Ordering::Greater => Some(superfluous),
        Ordering::Less => Some(missing),
        Ordering::Equal => None,
    }
}

impl LintRule for HeaderRule {
    fn name(&self) -> &str {
        RULE_NAME
    }

    fn description(&self) -> &str {
        "Validate the presence of a license header"
    }

    fn check(&self, file: &SourceFile) -> Vec<Diagnostic> {
        if file.has_template_section {
            tracing::debug!("Skipping component file {}", file.display_name());
            return Vec::new();
        }

        let expected = self.header.expected_for(&file.text);
        let located = locate(&file.leading_comments, self.header.line_comment_run());

        let diagnostics = match located.candidate {
            Some(candidate) => self.check_candidate(file, &expected, candidate),
            None => {
                let shebang = located.shebang.map(|index| &file.leading_comments[index]);
                vec![self.missing_header(file, &expected, shebang)]
            }
        };

        for diagnostic in &diagnostics {
            tracing::trace!(
                "{}:{}:{} {}",
                file.display_name(),
                diagnostic.anchor.position.line,
                diagnostic.anchor.position.column,
                diagnostic.message
            );
        }

        diagnostics
    }
}
