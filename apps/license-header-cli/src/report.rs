//! Result reporting
//!
//! - **Text**: one `path:line:column  message  [rule]` line per diagnostic
//!   followed by a summary
//! - **Json**: an array of per-file reports for CI integration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared_types::Diagnostic;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Output format for check results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedDiagnostic {
    pub rule: String,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub fixable: bool,
}

impl From<&Diagnostic> for ReportedDiagnostic {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            rule: diagnostic.rule.clone(),
            message: diagnostic.message.to_string(),
            line: diagnostic.anchor.position.line,
            column: diagnostic.anchor.position.column,
            fixable: diagnostic.is_fixable(),
        }
    }
}

/// Diagnostics remaining for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub diagnostics: Vec<ReportedDiagnostic>,
}

impl FileReport {
    pub fn new(path: impl Into<String>, diagnostics: &[Diagnostic]) -> Self {
        Self {
            path: path.into(),
            diagnostics: diagnostics.iter().map(ReportedDiagnostic::from).collect(),
        }
    }
}

pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, reports: &[FileReport]) -> Result<()> {
        let output = self.format_reports(reports)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }

    pub fn format_reports(&self, reports: &[FileReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            OutputFormat::Text => Ok(format_text(reports)),
        }
    }
}

fn format_text(reports: &[FileReport]) -> String {
    let mut output = String::new();
    let mut problems = 0;
    let mut fixable = 0;

    for report in reports {
        for diagnostic in &report.diagnostics {
            let _ = writeln!(
                output,
                "{}:{}:{}  {}  [{}]",
                report.path, diagnostic.line, diagnostic.column, diagnostic.message, diagnostic.rule
            );
            problems += 1;
            if diagnostic.fixable {
                fixable += 1;
            }
        }
    }

    if problems == 0 {
        output.push_str("No license header problems");
    } else {
        let files = reports.iter().filter(|r| !r.diagnostics.is_empty()).count();
        let _ = write!(
            output,
            "{} problem{} in {} file{} ({} fixable with --fix)",
            problems,
            if problems == 1 { "" } else { "s" },
            files,
            if files == 1 { "" } else { "s" },
            fixable
        );
    }
    output
}
