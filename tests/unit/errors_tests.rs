/*!
 * Tests for the application error types and their conversions
 */

use std::io;
use anyhow::anyhow;
use transbv::errors::{AppError, FormatError};

/// Test that a format error converts into the app-level wrapper
#[test]
fn test_app_error_fromFormatError_shouldWrapAsFormat() {
    let err: AppError = FormatError::OrphanText { line: 3 }.into();

    assert!(matches!(err, AppError::Format(FormatError::OrphanText { line: 3 })));
    assert_eq!(
        err.to_string(),
        "Format error: caption text at line 3 precedes the first timestamp marker"
    );
}

/// Test that an I/O error converts into a File variant carrying the message
#[test]
fn test_app_error_fromIoError_shouldWrapAsFile() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "talk.txt not found");
    let err: AppError = io_err.into();

    assert!(matches!(err, AppError::File(_)));
    assert_eq!(err.to_string(), "File error: talk.txt not found");
}

/// Test that an anyhow error converts into the Unknown variant
#[test]
fn test_app_error_fromAnyhow_shouldWrapAsUnknown() {
    let err: AppError = anyhow!("something unexpected").into();

    assert!(matches!(err, AppError::Unknown(_)));
    assert_eq!(err.to_string(), "Unknown error: something unexpected");
}

/// Test the display messages of the format error variants
#[test]
fn test_format_error_display_withEachVariant_shouldIncludeDetails() {
    let err = FormatError::InvalidTimestamp { line: 7, value: "12abc".to_string() };
    assert_eq!(err.to_string(), "invalid timestamp at line 7: \"12abc\"");

    let err = FormatError::EmptyTranscript;
    assert_eq!(err.to_string(), "no timestamp markers found, nothing to convert");
}
