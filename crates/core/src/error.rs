//! Error types for the kvharness crates.
//!
//! Only conditions that abort a run are represented here. A key that is not
//! present when read or deleted is a normal result (`OpResult::NotFound`,
//! rendered as `-ERROR-`) and never produces an [`Error`].

use std::io;

/// Result type alias for kvharness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal harness errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Configuration | `InvalidConfiguration` | Bad count, length or config file |
/// | Input | `MalformedOperationLine`, `MalformedResultLine` | Stream structure violated |
/// | Encoding | `InvalidToken` | Key or value cannot be written as a single field |
/// | System | `Io` | Reading or writing streams failed |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Non-numeric or out-of-range configuration input
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Operation stream line with an unknown tag or wrong field count
    #[error("malformed operation on line {line}: {reason}")]
    MalformedOperationLine { line: usize, reason: String },

    /// Result stream line that cannot be scored
    #[error("malformed result on line {line}: {reason}")]
    MalformedResultLine { line: usize, reason: String },

    /// Key or value that the line format cannot carry
    #[error("invalid {field}: {reason}")]
    InvalidToken { field: &'static str, reason: String },

    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },
}

impl Error {
    /// Create an `InvalidConfiguration` error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a `MalformedOperationLine` error for a 1-based line number.
    pub fn malformed_operation(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedOperationLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create a `MalformedResultLine` error for a 1-based line number.
    pub fn malformed_result(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedResultLine {
            line,
            reason: reason.into(),
        }
    }

    /// True for errors caused by operator-supplied configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration { .. })
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}
