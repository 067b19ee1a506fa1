use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::time_utils::TimeValue;
use crate::transcript_processor::TranscriptCollection;

// @module: Application controller for transcript conversion

/// Outcome of processing a single input file
#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// Converted and written to the given output path
    Converted(PathBuf),
    /// Output already existed and `--no-overwrites` was set; nothing written
    Skipped(PathBuf),
}

/// Per-batch counters; the exit code is derived from `failed`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files converted and written
    pub converted: usize,
    /// Files skipped because their output already existed
    pub skipped: usize,
    /// Files that failed to read, parse or write
    pub failed: usize,
}

impl BatchSummary {
    /// True when no file in the batch failed (skips are informational)
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Main application controller for transcript conversion
pub struct Controller {
    // @field: Anchor start time for the first block, None means no shift
    start_time: Option<TimeValue>,

    // @field: Never overwrite an existing output file
    no_overwrites: bool,
}

impl Controller {
    // @method: Create a new controller with the given options
    pub fn new(start_time: Option<TimeValue>, no_overwrites: bool) -> Self {
        Controller {
            start_time,
            no_overwrites,
        }
    }

    /// Process a batch of input files, one at a time.
    ///
    /// Each file is converted independently; a failure on one file is
    /// reported and the batch continues with the next.
    pub fn run_batch(&self, inputs: &[PathBuf]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for input in inputs {
            match self.convert_file(input) {
                Ok(FileOutcome::Converted(output)) => {
                    info!("Converted {:?} -> {:?}", input, output);
                    summary.converted += 1;
                }
                Ok(FileOutcome::Skipped(output)) => {
                    summary.skipped += 1;
                    debug!("Skipped {:?} (output {:?} exists)", input, output);
                }
                Err(e) => {
                    error!("Error processing {:?}: {:#}", input, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} converted, {} skipped, {} failed",
            summary.converted, summary.skipped, summary.failed
        );

        summary
    }

    /// Run the full pipeline for one input file: derive the output path,
    /// read, parse, shift, serialize, write.
    pub fn convert_file(&self, input: &Path) -> Result<FileOutcome> {
        let output = FileManager::derive_output_path(input);

        if FileManager::file_exists(&output) {
            if self.no_overwrites {
                warn!("Output file already exists, processing omitted: {:?}", output);
                return Ok(FileOutcome::Skipped(output));
            }
            warn!("Output file already exists and will be overwritten: {:?}", output);
        }

        let content = FileManager::read_to_string(input)?;

        let mut collection = TranscriptCollection::parse_string(input.to_path_buf(), &content)
            .with_context(|| format!("Failed to parse transcript: {:?}", input))?;

        if let Some(anchor) = self.start_time {
            collection.shift_to_anchor(anchor);
        }

        // Serialize to memory first; the output file is only touched once
        // the whole transcript has converted cleanly
        let rendered = collection.to_sbv_string();
        FileManager::write_to_file(&output, &rendered)?;

        Ok(FileOutcome::Converted(output))
    }
}
