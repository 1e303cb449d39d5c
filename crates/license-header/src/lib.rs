//! License header checks
//!
//! Validates that source files start with the configured license header,
//! separated by exactly one blank line from a preceding shebang and from the
//! code that follows, and computes fixes for every violation.
//!
//! ```
//! use license_header::{HeaderEngine, HeaderOptions};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = HeaderOptions::from_lines(["/* Copyright Foo Corp. */"]);
//! let engine = HeaderEngine::new(&options, Path::new("."))?;
//!
//! let report = engine.fix_text(None, "module.exports = function() {};")?;
//! assert_eq!(
//!     report.output,
//!     "/* Copyright Foo Corp. */\n\nmodule.exports = function() {};"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod fixer;
pub mod locator;
pub mod patterns;
pub mod resolver;
pub mod rules;
pub mod scanner;

pub use error::{HeaderError, ScanError};
pub use fixer::{apply_fixes, FixOutcome};
pub use resolver::{ExpectedHeader, HeaderOptions, HeaderSource, PatternSpec, ResolvedHeader};
pub use rules::{HeaderRule, LintRule};
pub use scanner::scan_source;

use shared_types::{Diagnostic, Fix, SourceFile};
use std::path::Path;

/// Upper bound on fix passes for one file
pub const MAX_FIX_PASSES: usize = 10;

/// Result of fixing one file
#[derive(Debug, Clone)]
pub struct FixReport {
    pub output: String,
    /// Number of passes that changed the text
    pub passes: usize,
    /// Diagnostics still reported for `output`
    pub remaining: Vec<Diagnostic>,
}

impl FixReport {
    pub fn is_clean(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Engine entry point: runs every registered rule over a file
pub struct HeaderEngine {
    rules: Vec<Box<dyn LintRule>>,
}

impl HeaderEngine {
    /// Resolve the header configuration and register the header rule.
    ///
    /// # Errors
    ///
    /// Returns a [`HeaderError`] when the header cannot be resolved; nothing
    /// should be checked in that case.
    pub fn new(options: &HeaderOptions, base_dir: &Path) -> Result<Self, HeaderError> {
        let header = options.resolve(base_dir)?;
        Ok(Self::with_rules(vec![Box::new(HeaderRule::new(header))]))
    }

    pub fn with_rules(rules: Vec<Box<dyn LintRule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn check_file(&self, file: &SourceFile) -> Vec<Diagnostic> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(file))
            .collect()
    }

    /// Scan and check raw text
    pub fn check_text(&self, path: Option<&Path>, text: &str) -> Result<Vec<Diagnostic>, ScanError> {
        let file = scan_source(path, text)?;
        Ok(self.check_file(&file))
    }

    /// Fix raw text, re-checking after every pass until no fix applies.
    ///
    /// Each pass applies the non-overlapping fixes of the current diagnostics,
    /// so a header-text fix and a spacing fix for the same header land in
    /// separate passes.
    pub fn fix_text(&self, path: Option<&Path>, text: &str) -> Result<FixReport, ScanError> {
        let mut output = text.to_string();
        let mut passes = 0;

        loop {
            let remaining = self.check_text(path, &output)?;
            let fixes: Vec<Fix> = remaining.iter().filter_map(|d| d.fix.clone()).collect();
            if fixes.is_empty() || passes == MAX_FIX_PASSES {
                return Ok(FixReport {
                    output,
                    passes,
                    remaining,
                });
            }

            let outcome = apply_fixes(&output, &fixes);
            if outcome.applied == 0 || outcome.output == output {
                return Ok(FixReport {
                    output,
                    passes,
                    remaining,
                });
            }

            passes += 1;
            output = outcome.output;
            tracing::debug!(
                "Fix pass {} applied {} fixes ({} deferred)",
                passes,
                outcome.applied,
                outcome.skipped
            );
        }
    }
}
