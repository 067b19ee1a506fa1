/*!
 * # transbv - Transcript to SBV converter
 *
 * A Rust library and CLI for converting textual transcripts (YouTube's raw
 * public export or a previously produced SBV file) into the SBV subtitle
 * format, optionally re-anchoring all timestamps.
 *
 * ## Features
 *
 * - Parse raw YouTube transcripts and SBV files with auto-detection
 * - Re-anchor the first cue to a given start time, preserving spacing
 * - Derive cue end times from each successor's start
 * - Batch conversion with per-file outcome reporting
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `time_utils`: Timestamp parsing, formatting and arithmetic
 * - `transcript_processor`: Transcript parsing, shifting and SBV output
 * - `file_utils`: File system operations and output path derivation
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod time_utils;
pub mod transcript_processor;

// Re-export main types for easier usage
pub use app_controller::{BatchSummary, Controller, FileOutcome};
pub use errors::{AppError, FormatError};
pub use time_utils::TimeValue;
pub use transcript_processor::{TranscriptBlock, TranscriptCollection, TranscriptFormat};
