//! Regex patterns for license markers and line terminators

use lazy_static::lazy_static;
use regex::Regex;

/// Markers that identify a comment as a license header
pub const LICENSE_MARKERS: &[&str] = &["Copyright", "@license", "SPDX-License-Identifier"];

lazy_static! {
    /// Any of the license markers, case-insensitive
    static ref LICENSE_MARKER_PATTERN: Regex = Regex::new(&format!(
        "(?i){}",
        LICENSE_MARKERS
            .iter()
            .map(|marker| regex::escape(marker))
            .collect::<Vec<_>>()
            .join("|")
    ))
    .unwrap();

    /// A single line terminator: CRLF, CR, LF, LINE SEPARATOR or PARAGRAPH SEPARATOR
    pub static ref LINE_TERMINATOR_PATTERN: Regex =
        Regex::new("\r\n|[\r\n\u{2028}\u{2029}]").unwrap();
}

/// Does the comment text look like a license header?
pub fn is_license_comment(text: &str) -> bool {
    LICENSE_MARKER_PATTERN.is_match(text)
}

/// Newline style of a file: its first line terminator, or `\n` if it has none
pub fn detect_newline(text: &str) -> &'static str {
    match LINE_TERMINATOR_PATTERN.find(text).map(|m| m.as_str()) {
        Some("\r\n") => "\r\n",
        Some("\r") => "\r",
        Some("\u{2028}") => "\u{2028}",
        Some("\u{2029}") => "\u{2029}",
        _ => "\n",
    }
}

pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_TERMINATOR_PATTERN.split(text).collect()
}

/// Rewrite every line terminator in `text` to `newline`
pub fn normalize_newlines(text: &str, newline: &str) -> String {
    split_lines(text).join(newline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_license_markers() {
        assert!(is_license_comment("/* Copyright Foo Corp. */"));
        assert!(is_license_comment("// copyright 2024 bar"));
        assert!(is_license_comment("/** @license MIT */"));
        assert!(is_license_comment("// SPDX-License-Identifier: Apache-2.0"));
        assert!(is_license_comment("// spdx-license-identifier: MIT"));
    }

    #[test]
    fn test_ignores_ordinary_comments() {
        assert!(!is_license_comment("/* some comment */"));
        assert!(!is_license_comment("// HELLO WORLD"));
        assert!(!is_license_comment("#!/usr/bin/env node"));
    }

    #[test]
    fn test_detect_newline_uses_first_terminator() {
        assert_eq!(detect_newline("a\r\nb\nc"), "\r\n");
        assert_eq!(detect_newline("a\nb\r\nc"), "\n");
        assert_eq!(detect_newline("a\u{2028}b"), "\u{2028}");
        assert_eq!(detect_newline("a\rb"), "\r");
    }

    #[test]
    fn test_detect_newline_defaults_to_lf() {
        assert_eq!(detect_newline(""), "\n");
        assert_eq!(detect_newline("module.exports = 1;"), "\n");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\nc\rd", "\n"), "a\nb\nc\nd");
        assert_eq!(normalize_newlines("a\nb", "\r\n"), "a\r\nb");
        assert_eq!(normalize_newlines("single", "\r\n"), "single");
    }
}
