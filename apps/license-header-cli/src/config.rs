//! Configuration file parsing
//!
//! The configuration is a TOML file naming the header source, optional
//! acceptance patterns and the files to check.

use anyhow::Context;
use license_header::{HeaderOptions, HeaderSource, PatternSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "license-header.toml";

/// Extensions checked when the configuration names none
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts", "rs", "go", "java", "c", "h", "cc",
    "cpp", "hpp", "cs", "swift", "kt", "scala", "dart",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Header file path or header lines
    #[serde(default)]
    pub header: Option<HeaderSource>,
    #[serde(default)]
    pub allowed_header_patterns: Vec<PatternSpec>,
    /// File extensions to check, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Path components that exclude a file or directory
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Directory relative header paths resolve against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// Relative header paths in the file resolve against its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    /// Parse configuration from a TOML string
    ///
    /// ```
    /// use license_header_cli::config::CliConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = CliConfig::from_str(r#"
    ///     header = ["// Copyright Foo Corp."]
    ///     extensions = ["js"]
    /// "#)?;
    /// assert_eq!(config.extensions, vec!["js"]);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Load the explicit config file, else the default one if present,
    /// else defaults rooted at the working directory
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
            return Self::from_file(default_path);
        }

        Ok(Self {
            extensions: default_extensions(),
            ..Self::default()
        })
    }

    /// Replace the configured header with a file given on the command line.
    ///
    /// Command-line paths resolve against the working directory.
    pub fn override_header(&mut self, path: PathBuf) {
        self.header = Some(HeaderSource::Path(path));
        self.base_dir = PathBuf::new();
    }

    pub fn header_options(&self) -> HeaderOptions {
        HeaderOptions {
            header_source: self.header.clone(),
            allowed_header_patterns: self.allowed_header_patterns.clone(),
        }
    }

    /// Directory for resolving relative header paths
    pub fn base_dir(&self) -> &Path {
        if self.base_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.base_dir
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = CliConfig::from_str(
            r#"
            header = "resources/license-header.js"
            allowed_header_patterns = [
                "/* Copyright Foo Corp. */",
                { regex = "Copyright \\d{4}" },
            ]
            extensions = ["js", "ts"]
            exclude = ["vendor"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.header,
            Some(HeaderSource::Path(PathBuf::from("resources/license-header.js")))
        );
        assert_eq!(
            config.allowed_header_patterns,
            vec![
                PatternSpec::Literal("/* Copyright Foo Corp. */".to_string()),
                PatternSpec::Regex {
                    regex: r"Copyright \d{4}".to_string()
                },
            ]
        );
        assert_eq!(config.extensions, vec!["js", "ts"]);
        assert_eq!(config.exclude, vec!["vendor"]);
    }

    #[test]
    fn test_header_lines() {
        let config = CliConfig::from_str(r#"header = ["// a", "// b"]"#).unwrap();
        assert_eq!(
            config.header,
            Some(HeaderSource::Lines(vec![
                "// a".to_string(),
                "// b".to_string()
            ]))
        );
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_str("").unwrap();
        assert_eq!(config.header, None);
        assert!(config.allowed_header_patterns.is_empty());
        assert!(config.extensions.iter().any(|ext| ext == "ts"));
        assert_eq!(config.base_dir(), Path::new("."));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(CliConfig::from_str("header = [").is_err());
    }

    #[test]
    fn test_from_file_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("license-header.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"header = "header.txt""#).unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir(), dir.path());
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let err = CliConfig::from_file("/nonexistent/license-header.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/license-header.toml"));
    }

    #[test]
    fn test_override_header_resets_base_dir() {
        let mut config = CliConfig {
            base_dir: PathBuf::from("/etc"),
            ..CliConfig::default()
        };
        config.override_header(PathBuf::from("LICENSE"));
        assert_eq!(config.base_dir(), Path::new("."));
        assert_eq!(
            config.header_options().header_source,
            Some(HeaderSource::Path(PathBuf::from("LICENSE")))
        );
    }
}
