//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Why a clock string could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Not exactly two `:` separators
    ColonCount,
    /// More than one `.` separator
    ExtraDot,
    /// Hours, minutes, seconds or fraction is not a number
    NonNumeric,
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColonCount => write!(f, "expected HH:MM:SS"),
            Self::ExtraDot => write!(f, "more than one fractional separator"),
            Self::NonNumeric => write!(f, "non-numeric component"),
        }
    }
}

/// Malformed race clock string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time {text:?}: {issue}")]
pub struct FormatError {
    pub text: String,
    pub issue: FormatIssue,
}

impl FormatError {
    pub fn new(text: impl Into<String>, issue: FormatIssue) -> Self {
        Self {
            text: text.into(),
            issue,
        }
    }
}

/// Main error type for racemerge operations
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed clock string in a scored result
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A scored result without an elapsed time
    #[error("no time for scored competitor {name:?} in {category:?}")]
    MissingTime { name: String, category: String },

    /// Nothing to aggregate
    #[error("at least one stage document is required")]
    NoStages,

    /// Result document could not be opened or read
    #[error("unable to read result file {path:?}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result document is not valid JSON for the expected shape
    #[error("invalid json in {path:?}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_time(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self::MissingTime {
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias for racemerge operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message_names_text_and_issue() {
        let err = FormatError::new("10:00", FormatIssue::ColonCount);
        assert_eq!(err.to_string(), "invalid time \"10:00\": expected HH:MM:SS");
    }

    #[test]
    fn test_format_error_converts_into_error() {
        let err: Error = FormatError::new("aa:00:00", FormatIssue::NonNumeric).into();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(err.to_string(), "invalid time \"aa:00:00\": non-numeric component");
    }

    #[test]
    fn test_missing_time_names_competitor() {
        let err = Error::missing_time("Jan", "H21");
        assert_eq!(err.to_string(), "no time for scored competitor \"Jan\" in \"H21\"");
    }
}
