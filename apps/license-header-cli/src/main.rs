//! License Header Checker Binary
//!
//! Checks (and optionally fixes) license headers in source files.

use anyhow::Context;
use clap::Parser;
use license_header::HeaderEngine;
use license_header_cli::{collect_files, CliConfig, FileFilter, OutputFormat, Reporter, Runner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "license-header")]
#[command(version, about = "Check that source files start with the license header")]
struct Args {
    /// Files or directories to check
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Configuration file (defaults to license-header.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// License header file, overriding the configuration
    #[arg(long)]
    header: Option<PathBuf>,

    /// Write fixes back to the files
    #[arg(long)]
    fix: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Reports go to stdout, logs to stderr
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (engine, config) = match load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let filter = FileFilter::new(&config.extensions, &config.exclude);
    let files = collect_files(&args.paths, &filter);
    let summary = Runner::new(&engine, args.fix).run(&files);

    if let Err(e) = Reporter::new(args.format).report(&summary.reports) {
        eprintln!("error: {:#}", e);
        return ExitCode::from(2);
    }

    if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Resolve configuration and header before touching any source file
fn load(args: &Args) -> anyhow::Result<(HeaderEngine, CliConfig)> {
    let mut config = CliConfig::load(args.config.as_deref())?;
    if let Some(header) = &args.header {
        config.override_header(header.clone());
    }

    let engine = HeaderEngine::new(&config.header_options(), config.base_dir())
        .context("Invalid license header configuration")?;
    tracing::debug!("Extensions: {}", config.extensions.join(", "));
    Ok((engine, config))
}
