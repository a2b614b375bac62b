//! Error types for munsort.
//!
//! Library crates use [`MunsortError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all munsort operations.
#[derive(Debug, thiserror::Error)]
pub enum MunsortError {
    /// The document body never widened past a singleton wrapper level.
    /// Fatal for that document; callers should skip it.
    #[error("empty document: no multi-element level within {depth} wrapper levels")]
    EmptyDocument { depth: usize },

    /// Configuration loading or validation error, including invalid
    /// override rules. Always fails fast.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error during link resolution. Recovered internally by
    /// the resolver's fallback path; callers normally never see it.
    #[error("network error: {0}")]
    Network(String),

    /// Text or markup parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Packaged-document archive error (extract or repack).
    #[error("archive error: {message}")]
    Archive { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MunsortError>;

impl MunsortError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create an archive error from any displayable message.
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = MunsortError::config("rule 3: invalid pattern");
        assert_eq!(err.to_string(), "config error: rule 3: invalid pattern");

        let err = MunsortError::EmptyDocument { depth: 64 };
        assert!(err.to_string().contains("64"));

        let err = MunsortError::archive("word/document.xml missing");
        assert!(err.to_string().contains("document.xml"));
    }
}
