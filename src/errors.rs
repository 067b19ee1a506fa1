/*!
 * Error types for the transbv application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing a transcript
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// A marker candidate line did not parse as a timestamp (or timestamp pair)
    #[error("invalid timestamp at line {line}: \"{value}\"")]
    InvalidTimestamp {
        /// 1-based input line number
        line: usize,
        /// The offending line text
        value: String,
    },

    /// A caption line appeared before any marker line, so no block can own it
    #[error("caption text at line {line} precedes the first timestamp marker")]
    OrphanText {
        /// 1-based input line number
        line: usize,
    },

    /// The input contained no marker lines at all
    #[error("no timestamp markers found, nothing to convert")]
    EmptyTranscript,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from transcript parsing
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
