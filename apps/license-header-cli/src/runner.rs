//! Checking and fixing files on disk

use crate::report::FileReport;
use anyhow::Context;
use license_header::HeaderEngine;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a run over all discovered files
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One report per checked file, including clean ones
    pub reports: Vec<FileReport>,
    pub files_checked: usize,
    pub files_fixed: usize,
    /// Files that could not be read, scanned or written
    pub failures: usize,
}

impl RunSummary {
    pub fn problem_count(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0 && self.failures == 0
    }
}

pub struct Runner<'a> {
    engine: &'a HeaderEngine,
    fix: bool,
}

impl<'a> Runner<'a> {
    pub fn new(engine: &'a HeaderEngine, fix: bool) -> Self {
        Self { engine, fix }
    }

    pub fn run(&self, files: &[PathBuf]) -> RunSummary {
        let mut summary = RunSummary::default();

        for path in files {
            match self.process(path) {
                Ok((report, fixed)) => {
                    summary.files_checked += 1;
                    if fixed {
                        summary.files_fixed += 1;
                    }
                    summary.reports.push(report);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {:#}", path.display(), e);
                    summary.failures += 1;
                }
            }
        }

        tracing::info!(
            "Checked {} files, fixed {}, {} failed",
            summary.files_checked,
            summary.files_fixed,
            summary.failures
        );
        summary
    }

    /// Check one file, writing fixes back when enabled
    fn process(&self, path: &Path) -> anyhow::Result<(FileReport, bool)> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path.display().to_string();

        if !self.fix {
            let diagnostics = self
                .engine
                .check_text(Some(path), &text)
                .with_context(|| format!("Failed to scan {}", name))?;
            return Ok((FileReport::new(name, &diagnostics), false));
        }

        let outcome = self
            .engine
            .fix_text(Some(path), &text)
            .with_context(|| format!("Failed to scan {}", name))?;
        let fixed = outcome.output != text;
        if fixed {
            fs::write(path, &outcome.output)
                .with_context(|| format!("Failed to write {}", name))?;
            tracing::debug!("Fixed {} in {} passes", name, outcome.passes);
        }
        Ok((FileReport::new(name, &outcome.remaining), fixed))
    }
}
