//! Error types for content ingestion and date formatting

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], for callers that map failures
/// onto their own responses (e.g. a "not found" page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedFrontMatter,
    InvalidDate,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The content directory does not exist
    #[error("content directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The front-matter block is unterminated or is not a YAML mapping
    #[error("malformed front-matter in {}: {reason}", path.display())]
    MalformedFrontMatter { path: PathBuf, reason: String },

    /// A date string could not be parsed
    #[error("invalid date: {input:?}")]
    InvalidDate { input: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::MalformedFrontMatter { .. } => ErrorKind::MalformedFrontMatter,
            Error::InvalidDate { .. } => ErrorKind::InvalidDate,
            Error::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = Error::NotFound {
            path: PathBuf::from("src/app/blog/posts"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("src/app/blog/posts"));

        let err = Error::InvalidDate {
            input: "yesterday".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(err.to_string(), "invalid date: \"yesterday\"");
    }
}
