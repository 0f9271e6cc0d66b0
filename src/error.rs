//! Unified error types for chatrecon.
//!
//! This module provides a single [`ChatreconError`] enum that covers all error
//! cases in the library.
//!
//! Note what is *not* an error: a line that fails the header grammar is a
//! continuation line, and a header whose body matches no known phrasing is
//! kept as a record with `user` and `action` unset. The only structural
//! failure of a transcript is [`ChatreconError::InvalidStart`].

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatrecon operations.
///
/// # Example
///
/// ```rust
/// use chatrecon::error::Result;
/// use chatrecon::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatreconError>;

/// The error type for all chatrecon operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatreconError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - The input is not valid UTF-8
    /// - Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript does not begin with a message header.
    ///
    /// Raised when a continuation line is read before any header line has
    /// been seen. No records are produced for such input.
    #[error("Invalid start of data: line {line} is not a message header")]
    InvalidStart {
        /// 1-based physical line number of the offending line
        line: usize,
    },

    /// A file or value doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    ///
    /// This can occur when writing JSON output or loading an alias table.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatreconError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatreconError::Io(io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatreconError {
    /// Creates an invalid start error for the given 1-based line.
    pub fn invalid_start(line: usize) -> Self {
        ChatreconError::InvalidStart { line }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatreconError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatreconError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatreconError::Io(_))
    }

    /// Returns `true` if the transcript did not start with a header.
    pub fn is_invalid_start(&self) -> bool {
        matches!(self, ChatreconError::InvalidStart { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatreconError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatreconError::InvalidDate { .. })
    }
}
