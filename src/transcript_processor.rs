use std::fmt;
use std::path::PathBuf;
use anyhow::Result;
use log::debug;

use crate::errors::FormatError;
use crate::time_utils::TimeValue;

// @module: Transcript parsing, time shifting and SBV serialization

// @const: Header comment mark, only honored before the first marker line
const HEADER_MARK: char = '#';

// @const: Separator between the start and end timestamps of an SBV cue
const TIME_SEPARATOR: char = ',';

// @const: Prefix tagging a caption line as a continuation in raw transcripts
const CONTINUATION_MARK: &str = "- ";

/// Input flavor of a transcript file, decided once per file from the first
/// marker line: a comma-separated timestamp pair means the input is already
/// SBV and is being re-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    /// YouTube raw export: one start timestamp per marker line
    Raw,
    /// Previously produced SBV: `start,end` pairs, the end is re-derived
    Sbv,
}

/// One caption cue: a start time and its caption lines.
///
/// `lines` may be empty for a bare marker with no caption text; such blocks
/// are preserved so the block count always matches the marker count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptBlock {
    /// Cue start time
    pub start: TimeValue,

    /// Caption lines in insertion order, continuation marker already stripped
    pub lines: Vec<String>,
}

impl TranscriptBlock {
    /// Creates a new block with no caption lines yet
    pub fn new(start: TimeValue) -> Self {
        TranscriptBlock {
            start,
            lines: Vec::new(),
        }
    }
}

/// Ordered collection of transcript blocks from one input file
#[derive(Debug)]
pub struct TranscriptCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Blocks in input order (the source is assumed already sorted; we never re-sort)
    pub blocks: Vec<TranscriptBlock>,

    /// Detected input flavor
    pub source_format: TranscriptFormat,
}

impl TranscriptCollection {
    /// Parse transcript content into an ordered block collection.
    ///
    /// The input mode is auto-detected from the first marker line and then
    /// fixed for the whole file. Fails with a line-numbered [`FormatError`]
    /// on an unparseable marker or on caption text preceding the first marker.
    pub fn parse_string(source_file: PathBuf, content: &str) -> Result<Self, FormatError> {
        let mut format: Option<TranscriptFormat> = None;
        let mut blocks: Vec<TranscriptBlock> = Vec::new();
        let mut current: Option<TranscriptBlock> = None;

        for (idx, raw_line) in content.lines().enumerate() {
            let line_num = idx + 1;
            let trimmed = raw_line.trim();

            // Blank lines separate blocks but carry no data
            if trimmed.is_empty() {
                continue;
            }

            // Header comments are only meaningful before the first marker
            if format.is_none() && trimmed.starts_with(HEADER_MARK) {
                continue;
            }

            if Self::is_marker_candidate(trimmed) {
                let mode = *format.get_or_insert_with(|| {
                    if trimmed.contains(TIME_SEPARATOR) {
                        TranscriptFormat::Sbv
                    } else {
                        TranscriptFormat::Raw
                    }
                });

                let start = Self::parse_marker(trimmed, mode)
                    .map_err(|_| FormatError::InvalidTimestamp {
                        line: line_num,
                        value: trimmed.to_string(),
                    })?;

                if let Some(done) = current.take() {
                    blocks.push(done);
                }
                current = Some(TranscriptBlock::new(start));
            } else {
                let Some(block) = current.as_mut() else {
                    return Err(FormatError::OrphanText { line: line_num });
                };

                // SBV has no continuation syntax, so a leading dash there is
                // caption content and must survive the round trip
                let text = match format {
                    Some(TranscriptFormat::Raw) => {
                        trimmed.strip_prefix(CONTINUATION_MARK).unwrap_or(trimmed)
                    }
                    _ => trimmed,
                };
                block.lines.push(text.to_string());
            }
        }

        if let Some(done) = current.take() {
            blocks.push(done);
        }

        let Some(source_format) = format else {
            return Err(FormatError::EmptyTranscript);
        };

        debug!("Parsed {} block(s) from {:?} ({:?} input)", blocks.len(), source_file, source_format);

        Ok(TranscriptCollection {
            source_file,
            blocks,
            source_format,
        })
    }

    /// A marker candidate is a single whitespace-free token starting with a
    /// digit; it must then parse as a timestamp or the file is malformed.
    fn is_marker_candidate(trimmed: &str) -> bool {
        trimmed.chars().next().is_some_and(|c| c.is_ascii_digit())
            && !trimmed.chars().any(char::is_whitespace)
    }

    /// Extract the start time from a marker line in the given mode.
    ///
    /// SBV markers carry a `start,end` pair; the end is parsed for validation
    /// but discarded, since output end times are re-derived from successors.
    fn parse_marker(marker: &str, mode: TranscriptFormat) -> Result<TimeValue> {
        match mode {
            TranscriptFormat::Raw => TimeValue::parse(marker),
            TranscriptFormat::Sbv => {
                let parts: Vec<&str> = marker.split(TIME_SEPARATOR).collect();
                if parts.len() != 2 {
                    anyhow::bail!("Expected a start,end timestamp pair: {}", marker);
                }
                let start = TimeValue::parse(parts[0])?;
                let _end = TimeValue::parse(parts[1])?;
                Ok(start)
            }
        }
    }

    /// Shift every block so the first block starts exactly at `anchor`.
    ///
    /// All blocks move by the same signed delta, which preserves relative
    /// spacing; any start that would underflow is clamped to 0 independently,
    /// with no redistribution of the later blocks.
    pub fn shift_to_anchor(&mut self, anchor: TimeValue) {
        let Some(first) = self.blocks.first() else {
            return;
        };
        let delta = anchor.delta_from(first.start);
        debug!("Anchoring first block at {} (delta {} ms)", anchor, delta);

        for block in &mut self.blocks {
            block.start = block.start.offset_by(delta);
        }
    }

    /// Render the collection as SBV text.
    ///
    /// Each block's end time is the next block's start; the last block has no
    /// successor so its end equals its own start (a zero-duration cue, since
    /// no authoritative end exists without the video length). Blocks are
    /// separated by one blank line with no trailing blank after the last.
    pub fn to_sbv_string(&self) -> String {
        let mut out = String::new();

        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let end = self.blocks.get(i + 1).map_or(block.start, |next| next.start);
            out.push_str(&format!("{}{}{}\n", block.start, TIME_SEPARATOR, end));
            for line in &block.lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        out
    }
}

impl fmt::Display for TranscriptCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Transcript Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Format: {:?}", self.source_format)?;
        writeln!(f, "Blocks: {}", self.blocks.len())?;
        Ok(())
    }
}
