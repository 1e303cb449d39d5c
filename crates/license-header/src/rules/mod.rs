//! Lint rules run by the engine

pub mod header;

pub use header::HeaderRule;

use shared_types::{Diagnostic, SourceFile};

/// Trait for lint rules
pub trait LintRule: Send + Sync {
    /// Rule identifier used in reports (e.g., "license-header/header")
    fn name(&self) -> &str;

    /// One-line human-readable description
    fn description(&self) -> &str;

    /// Check one file. Each diagnostic carries its own fix, if any.
    fn check(&self, file: &SourceFile) -> Vec<Diagnostic>;
}
