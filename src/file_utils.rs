use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and path utilities

// @const: Output subtitle extension
const SBV_EXTENSION: &str = "sbv";

// @const: Extension used when the input already is SBV, to avoid collision
const FIX_EXTENSION: &str = "fix.sbv";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }

    // @generates: Output path for a converted transcript
    // Replaces the input extension with `.sbv`; an input that already is
    // `.sbv` (any case) becomes `.fix.sbv` so the source is never clobbered.
    pub fn derive_output_path<P: AsRef<Path>>(input_file: P) -> PathBuf {
        let input_file = input_file.as_ref();

        let is_sbv = input_file.extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SBV_EXTENSION));

        if is_sbv {
            input_file.with_extension(FIX_EXTENSION)
        } else {
            input_file.with_extension(SBV_EXTENSION)
        }
    }
}
