/*!
 * End-to-end conversion workflow tests
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use transbv::app_controller::{Controller, FileOutcome};
use transbv::file_utils::FileManager;
use transbv::time_utils::TimeValue;
use transbv::transcript_processor::{TranscriptCollection, TranscriptFormat};
use crate::common;

/// Convert a raw transcript, then re-process the produced SBV file: the
/// second pass must detect SBV input, write to `.fix.sbv`, and preserve
/// every start time and caption line.
#[test]
fn test_workflow_withRawThenSbvReprocessing_shouldPreserveBlocks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_transcript(&dir, "talk.txt")?;

    let controller = Controller::new(None, false);

    // First pass: raw -> SBV
    let first_output = dir.join("talk.sbv");
    assert_eq!(controller.convert_file(&input)?, FileOutcome::Converted(first_output.clone()));

    // Second pass: SBV -> .fix.sbv
    let second_output = dir.join("talk.fix.sbv");
    assert_eq!(
        controller.convert_file(&first_output)?,
        FileOutcome::Converted(second_output.clone())
    );

    let first = TranscriptCollection::parse_string(first_output.clone(), &fs::read_to_string(&first_output)?)
        .map_err(anyhow::Error::from)?;
    let second = TranscriptCollection::parse_string(second_output.clone(), &fs::read_to_string(&second_output)?)
        .map_err(anyhow::Error::from)?;

    assert_eq!(first.source_format, TranscriptFormat::Sbv);
    assert_eq!(second.source_format, TranscriptFormat::Sbv);
    assert_eq!(second.blocks, first.blocks);
    Ok(())
}

/// Re-anchoring an SBV file shifts every cue by the same delta
#[test]
fn test_workflow_withSbvInputAndAnchor_shouldShiftAllCues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_sbv(&dir, "part2.sbv")?;

    let controller = Controller::new(Some(TimeValue::parse("1:00").unwrap()), false);
    controller.convert_file(&input)?;

    let rendered = fs::read_to_string(dir.join("part2.fix.sbv"))?;
    let collection = TranscriptCollection::parse_string(PathBuf::from("part2.fix.sbv"), &rendered)
        .map_err(anyhow::Error::from)?;

    // Source cues start at 2s, 5s and 9s; anchored at 1:00 they keep spacing
    let starts: Vec<u64> = collection.blocks.iter().map(|b| b.start.as_millis()).collect();
    assert_eq!(starts, vec![60_000, 63_000, 67_000]);
    Ok(())
}

/// A batch over several files produces one output per convertible input and
/// leaves outputs protected by --no-overwrites untouched.
#[test]
fn test_workflow_withBatchAndNoOverwrites_shouldReportPerFileOutcomes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    let fresh = common::create_test_transcript(&dir, "fresh.txt")?;
    let guarded = common::create_test_transcript(&dir, "guarded.txt")?;
    let preexisting = common::create_test_file(&dir, "guarded.sbv", "do not touch")?;
    let broken = common::create_test_file(&dir, "broken.txt", "text with no marker\n")?;

    let controller = Controller::new(None, true);
    let summary = controller.run_batch(&[fresh, guarded, broken]);

    assert_eq!(summary.converted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 1);
    assert!(!summary.is_success());

    assert!(FileManager::file_exists(dir.join("fresh.sbv")));
    assert_eq!(fs::read_to_string(&preexisting)?, "do not touch");
    assert!(!FileManager::file_exists(dir.join("broken.sbv")));
    Ok(())
}
