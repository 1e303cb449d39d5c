//! License header command-line driver
//!
//! Loads the configuration, discovers source files, runs the header check
//! over them and reports or fixes what it finds.

pub mod config;
pub mod discovery;
pub mod report;
pub mod runner;

pub use config::CliConfig;
pub use discovery::{collect_files, FileFilter};
pub use report::{FileReport, OutputFormat, Reporter};
pub use runner::{RunSummary, Runner};
