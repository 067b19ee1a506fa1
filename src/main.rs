// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_controller::Controller;
use crate::time_utils::TimeValue;

mod app_controller;
mod errors;
mod file_utils;
mod time_utils;
mod transcript_processor;

/// CLI wrapper for the logger verbosity
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for transbv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// transbv - Transcript adjuster and converter to the SBV subtitle format
///
/// Converts textual transcripts (YouTube raw export or SBV) into SBV,
/// optionally re-anchoring all timestamps to a given start time.
#[derive(Parser, Debug)]
#[command(name = "transbv")]
#[command(version = "1.0.0")]
#[command(about = "Transcript adjuster and converter to the SBV format")]
#[command(long_about = "transbv converts textual transcripts into the SBV subtitle format.

Input may be YouTube's raw public transcript export or a previously produced
SBV file (auto-detected). Output is written next to each input with the
extension replaced by .sbv, or .fix.sbv when the input already is SBV.

EXAMPLES:
    transbv talk.txt                      # Convert a raw transcript
    transbv -s 0 talk.txt                 # Re-anchor the first cue at 0:00:00.000
    transbv -s 1:30.5 part2.sbv           # Shift a previous conversion to 1m30.5s
    transbv -n talk.txt lecture.txt       # Batch convert, never overwrite outputs
    transbv completions bash > transbv.bash  # Generate bash completions

TIME FORMAT:
    Timestamps use [[h:]m:]s[.ms], e.g. 12.25, 3:05.25 or 1:03:05.25.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input transcript files to convert
    #[arg(value_name = "INPUT_FILES")]
    input_files: Vec<PathBuf>,

    /// Anchor the first subtitle at this start time ([[h:]m:]s[.ms])
    #[arg(short = 's', long = "start-time", value_name = "TIME")]
    start_time: Option<String>,

    /// Never overwrite an existing output file, skip it instead
    #[arg(short = 'n', long = "no-overwrites")]
    no_overwrites: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is raised or lowered after parsing the CLI options
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transbv", &mut std::io::stdout());
            Ok(())
        }
        None => run_convert(cli),
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    if let Some(cmd_log_level) = options.log_level {
        log::set_max_level(cmd_log_level.into());
    }

    if options.input_files.is_empty() {
        return Err(anyhow!("INPUT_FILES is required when no subcommand is specified"));
    }

    let anchor = options.start_time.as_deref()
        .map(TimeValue::parse)
        .transpose()
        .context("Invalid --start-time value")?;

    let controller = Controller::new(anchor, options.no_overwrites);
    let summary = controller.run_batch(&options.input_files);

    if summary.is_success() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} file(s) failed to convert",
            summary.failed,
            options.input_files.len()
        ))
    }
}
