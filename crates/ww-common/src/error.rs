//! Error types for Whale Watch.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints so the shell can decide between a re-prompt
//!   and a hard exit
//!
//! Recoverable errors (no data for a month, a negative waiting time) are
//! surfaced to the caller for a retry; configuration errors are fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Whale Watch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Engine parameter errors (grid scale, trial count, pod set).
    Config,
    /// Sighting record loading and parsing errors.
    Collection,
    /// Statistical estimation errors.
    Inference,
    /// Caller-supplied argument errors.
    Argument,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Collection => write!(f, "collection"),
            ErrorCategory::Inference => write!(f, "inference"),
            ErrorCategory::Argument => write!(f, "argument"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Whale Watch.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    // Collection errors (20-29)
    #[error("malformed record {record}: {message}")]
    MalformedRecord { record: usize, message: String },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    // Inference errors (30-39)
    #[error("no sightings match the requested filter: {0}")]
    EmptyInput(String),

    #[error("insufficient data: need at least {needed} distinct timestamps, found {found}")]
    InsufficientData { needed: usize, found: usize },

    // Argument errors (40-49)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    ///
    /// Codes are grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Collection errors
    /// - 30-39: Inference errors
    /// - 40-49: Argument errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidConfiguration(_) => 10,
            Error::MalformedRecord { .. } => 20,
            Error::Csv(_) => 21,
            Error::EmptyInput(_) => 30,
            Error::InsufficientData { .. } => 31,
            Error::InvalidArgument(_) => 40,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidConfiguration(_) => ErrorCategory::Config,
            Error::MalformedRecord { .. } | Error::Csv(_) => ErrorCategory::Collection,
            Error::EmptyInput(_) | Error::InsufficientData { .. } => ErrorCategory::Inference,
            Error::InvalidArgument(_) => ErrorCategory::Argument,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether the caller can recover by retrying with different input.
    ///
    /// `EmptyInput`, `InsufficientData`, and `InvalidArgument` are prompts
    /// to ask again; everything else needs operator attention.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput(_) | Error::InsufficientData { .. } | Error::InvalidArgument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_category() {
        let e = Error::InvalidConfiguration("empty pod set".to_string());
        assert_eq!(e.code(), 10);
        assert_eq!(e.category(), ErrorCategory::Config);

        let e = Error::EmptyInput("month 12".to_string());
        assert_eq!(e.code(), 30);
        assert_eq!(e.category(), ErrorCategory::Inference);

        let e = Error::InvalidArgument("negative waiting time".to_string());
        assert_eq!(e.code(), 40);
        assert_eq!(e.category(), ErrorCategory::Argument);
    }

    #[test]
    fn recoverability_hints() {
        assert!(Error::EmptyInput("month 1".to_string()).is_recoverable());
        assert!(Error::InsufficientData {
            needed: 2,
            found: 1
        }
        .is_recoverable());
        assert!(Error::InvalidArgument("bad".to_string()).is_recoverable());
        assert!(!Error::InvalidConfiguration("bad".to_string()).is_recoverable());
        assert!(!Error::MalformedRecord {
            record: 3,
            message: "bad latitude".to_string()
        }
        .is_recoverable());
    }

    #[test]
    fn display_includes_context() {
        let e = Error::MalformedRecord {
            record: 17,
            message: "unparseable longitude 'abc'".to_string(),
        };
        let text = e.to_string();
        assert!(text.contains("17"));
        assert!(text.contains("longitude"));
    }
}
