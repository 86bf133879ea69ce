/*!
 * Error types for the fixsrt application.
 *
 * Every error is fatal to the run: the first one encountered is reported and
 * the process exits. The types only exist so the failing condition is named
 * precisely when it reaches the operator.
 */

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading subtitle text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// A line expected to hold a block's integer index did not parse
    #[error("Malformed index on line {line_number}: {content:?} is not an integer")]
    MalformedIndex {
        /// 1-based line number within the file
        line_number: usize,
        /// The offending line, trimmed
        content: String,
    },
}

/// The filesystem operation that failed on a specific file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Rename,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "read",
            Self::Rename => "rename",
            Self::Write => "write",
        };
        write!(f, "{}", name)
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrong command line usage
    #[error("Usage error: {0}")]
    Usage(String),

    /// The target directory could not be listed
    #[error("Failed to read directory {path:?}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A subtitle file could not be parsed
    #[error("Failed to parse {path:?}: {source}")]
    Subtitle {
        path: PathBuf,
        #[source]
        source: SubtitleError,
    },

    /// Reading, renaming or writing a specific file failed
    #[error("Failed to {operation} {path:?}: {source}")]
    FileIo {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    // @creates: FileIo error for the given path
    pub fn file_io(path: impl Into<PathBuf>, operation: FileOperation, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            operation,
            source,
        }
    }
}
