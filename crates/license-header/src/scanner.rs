//! Leading-trivia scanner
//!
//! Reads the shebang, whitespace and comments at the top of a C-family source
//! file and stops at the first other character. Code is never parsed.

use crate::error::ScanError;
use crate::patterns::LINE_TERMINATOR_PATTERN;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Comment, CommentKind, Position, SourceFile, Span, Statement};
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

lazy_static! {
    static ref TEMPLATE_SECTION: Regex = Regex::new(r"(?m)^<template[\s>]").unwrap();
    /// Any top-level element, capturing its tag name
    static ref TOP_LEVEL_ELEMENT: Regex = Regex::new(r"(?m)^<([A-Za-z][\w:-]*)").unwrap();
}

/// Maps byte offsets to 1-based line/column positions
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(LINE_TERMINATOR_PATTERN.find_iter(text).map(|m| m.end()));
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn position(&self, text: &str, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = text[line_start..offset].chars().count() + 1;
        Position::new(line, column)
    }
}

/// Is this a component file (Vue, Svelte) with markup beside its script?
///
/// Only `.vue` and `.svelte` files qualify. A Vue file needs a `<template>`
/// section; a Svelte file needs a top-level element other than `<script>` or
/// `<style>`.
pub fn is_component_file(path: Option<&Path>, text: &str) -> bool {
    let extension = path
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("vue") => TEMPLATE_SECTION.is_match(text),
        Some("svelte") => TOP_LEVEL_ELEMENT.captures_iter(text).any(|caps| {
            let tag = caps[1].to_ascii_lowercase();
            tag != "script" && tag != "style"
        }),
        _ => false,
    }
}

/// Build a [`SourceFile`] from raw text.
///
/// # Errors
///
/// Returns [`ScanError::UnterminatedComment`] if a leading block comment never closes.
pub fn scan_source(path: Option<&Path>, text: &str) -> Result<SourceFile, ScanError> {
    let content_start = if text.starts_with(BYTE_ORDER_MARK) {
        BYTE_ORDER_MARK.len_utf8()
    } else {
        0
    };

    let mut file = SourceFile {
        path: path.map(Path::to_path_buf),
        text: text.to_string(),
        content_start,
        leading_comments: Vec::new(),
        first_statement: None,
        has_template_section: is_component_file(path, text),
    };
    if file.has_template_section {
        return Ok(file);
    }

    let index = LineIndex::new(text);
    let comment = |kind: CommentKind, start: usize, end: usize| Comment {
        kind,
        text: text[start..end].to_string(),
        span: Span::new(start, end),
        start: index.position(text, start),
        end: index.position(text, end),
    };

    let mut offset = content_start;
    let rest = &text[offset..];
    if rest.starts_with("#!") && !rest.starts_with("#![") {
        let end = line_end(text, offset);
        file.leading_comments.push(comment(CommentKind::Shebang, offset, end));
        offset = end;
    }

    loop {
        offset = skip_whitespace(text, offset);
        let rest = &text[offset..];

        let end = if rest.starts_with("//") {
            let end = line_end(text, offset);
            file.leading_comments.push(comment(CommentKind::Line, offset, end));
            end
        } else if rest.starts_with("/*") {
            let close = rest[2..]
                .find("*/")
                .ok_or_else(|| ScanError::UnterminatedComment(index.position(text, offset)))?;
            let end = offset + 2 + close + 2;
            file.leading_comments.push(comment(CommentKind::Block, offset, end));
            end
        } else {
            break;
        };

        offset = end;
    }

    if offset < text.len() {
        file.first_statement = Some(Statement {
            offset,
            position: index.position(text, offset),
        });
    }

    Ok(file)
}

/// Offset of the line terminator ending the line that contains `offset`
fn line_end(text: &str, offset: usize) -> usize {
    text[offset..]
        .find(['\n', '\r', '\u{2028}', '\u{2029}'])
        .map_or(text.len(), |i| offset + i)
}

fn skip_whitespace(text: &str, offset: usize) -> usize {
    text[offset..]
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |i| offset + i)
}
