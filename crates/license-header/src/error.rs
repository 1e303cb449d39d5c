use shared_types::Position;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors. Raised once, before any file is checked.
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("missing license header path")]
    MissingHeaderSource,

    #[error("could not read license header from <{}>", .path.display())]
    UnreadableHeader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("license header is empty")]
    EmptyHeader,

    #[error("invalid header pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure to read the leading comments of one file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("unterminated block comment starting at line {}, column {}", .0.line, .0.column)]
    UnterminatedComment(Position),
}
