//! Header resolution
//!
//! Turns rule options into the header a file is checked against. The
//! configuration-dependent part ([`ResolvedHeader`]) is built once per run;
//! the newline-dependent part ([`ExpectedHeader`]) once per file.

use crate::error::HeaderError;
use crate::patterns::{detect_newline, normalize_newlines, split_lines};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Where the expected header comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderSource {
    /// File whose trimmed contents are the header
    Path(PathBuf),
    /// Header lines, joined with the file's newline
    Lines(Vec<String>),
}

/// An alternative way for a header to be accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    /// Accepted when equal to the comment text, ignoring newline style
    Literal(String),
    /// Accepted when the regex matches the comment text
    Regex { regex: String },
}

/// Options of the header rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderOptions {
    #[serde(default, alias = "header", alias = "headerSource")]
    pub header_source: Option<HeaderSource>,
    /// When non-empty, replaces the exact comparison with the canonical header
    #[serde(default, alias = "allowedHeaderPatterns")]
    pub allowed_header_patterns: Vec<PatternSpec>,
}

impl HeaderOptions {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            header_source: Some(HeaderSource::Path(path.into())),
            allowed_header_patterns: Vec::new(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header_source: Some(HeaderSource::Lines(
                lines.into_iter().map(Into::into).collect(),
            )),
            allowed_header_patterns: Vec::new(),
        }
    }

    pub fn with_patterns(mut self, patterns: Vec<PatternSpec>) -> Self {
        self.allowed_header_patterns = patterns;
        self
    }

    /// Read and validate the configured header.
    ///
    /// Relative header paths are resolved against `base_dir`.
    ///
    /// # Errors
    ///
    /// - [`HeaderError::MissingHeaderSource`] when no source is configured
    /// - [`HeaderError::UnreadableHeader`] when the header file cannot be read
    /// - [`HeaderError::EmptyHeader`] when the header has no content
    /// - [`HeaderError::InvalidPattern`] when a regex pattern does not compile
    pub fn resolve(&self, base_dir: &Path) -> Result<ResolvedHeader, HeaderError> {
        let source = self
            .header_source
            .as_ref()
            .ok_or(HeaderError::MissingHeaderSource)?;

        let text = match source {
            HeaderSource::Path(path) => {
                let full_path = base_dir.join(path);
                let content =
                    fs::read_to_string(&full_path).map_err(|e| HeaderError::UnreadableHeader {
                        path: path.clone(),
                        source: e,
                    })?;
                tracing::debug!("Loaded license header from {}", full_path.display());
                content.trim_start_matches(BYTE_ORDER_MARK).trim().to_string()
            }
            HeaderSource::Lines(lines) => lines.join("\n"),
        };

        if text.trim().is_empty() {
            return Err(HeaderError::EmptyHeader);
        }

        let patterns = self
            .allowed_header_patterns
            .iter()
            .map(AcceptancePattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let lines: Vec<String> = split_lines(&text).into_iter().map(String::from).collect();
        tracing::debug!(
            "Resolved license header: {} lines, {} acceptance patterns",
            lines.len(),
            patterns.len()
        );

        Ok(ResolvedHeader { lines, patterns })
    }
}

#[derive(Debug, Clone)]
enum AcceptancePattern {
    /// Stored with `\n` line endings
    Literal(String),
    Regex(Regex),
}

impl AcceptancePattern {
    fn compile(spec: &PatternSpec) -> Result<Self, HeaderError> {
        match spec {
            PatternSpec::Literal(literal) => {
                Ok(AcceptancePattern::Literal(normalize_newlines(literal, "\n")))
            }
            PatternSpec::Regex { regex } => Regex::new(regex)
                .map(AcceptancePattern::Regex)
                .map_err(|e| HeaderError::InvalidPattern {
                    pattern: regex.clone(),
                    source: e,
                }),
        }
    }

    fn matches(&self, text: &str) -> bool {
        match self {
            AcceptancePattern::Literal(literal) => normalize_newlines(text, "\n") == *literal,
            AcceptancePattern::Regex(regex) => regex.is_match(text),
        }
    }
}

/// Configured header, independent of any file. Read-only and shareable across threads.
#[derive(Debug, Clone)]
pub struct ResolvedHeader {
    lines: Vec<String>,
    patterns: Vec<AcceptancePattern>,
}

impl ResolvedHeader {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Header lines a run of line comments is matched against.
    ///
    /// A header written as `//` lines returns all of them; any other header
    /// returns none and its candidate is always a single comment.
    pub fn line_comment_run(&self) -> &[String] {
        if self
            .lines
            .iter()
            .all(|line| line.trim_start().starts_with("//"))
        {
            &self.lines
        } else {
            &[]
        }
    }

    /// The header as it must appear in a file with the given text
    pub fn expected_for(&self, file_text: &str) -> ExpectedHeader<'_> {
        let newline = detect_newline(file_text);
        ExpectedHeader {
            canonical: self.lines.join(newline),
            newline,
            patterns: &self.patterns,
        }
    }
}

/// Canonical header and acceptance rules for one file
#[derive(Debug)]
pub struct ExpectedHeader<'a> {
    canonical: String,
    newline: &'static str,
    patterns: &'a [AcceptancePattern],
}

impl ExpectedHeader<'_> {
    /// Header text in the file's newline style; also the replacement text of fixes
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// One blank line: two newlines back to back
    pub fn separator(&self) -> String {
        self.newline.repeat(2)
    }

    /// Is `text` (a raw comment) a valid header?
    pub fn accepts(&self, text: &str) -> bool {
        if self.patterns.is_empty() {
            text == self.canonical
        } else {
            self.patterns.iter().any(|pattern| pattern.matches(text))
        }
    }
}
