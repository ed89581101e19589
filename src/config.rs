//! Configuration module for pdfmc.
//!
//! This module holds the validated, normalized configuration that drives a
//! run. It is built from CLI arguments by [`crate::cli::Cli::to_config`] and
//! can be constructed directly by library callers.

use std::path::PathBuf;

use crate::error::{PdfMcError, Result};
use crate::utils::same_location;

/// Default output path when none is given.
pub const DEFAULT_OUTPUT: &str = "merged.pdf";

/// Switches for the optional parts of the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Re-encode every page content stream with Flate at the best level.
    pub compress: bool,
    /// Collapse structurally identical indirect objects into one.
    pub deduplicate: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            compress: true,
            deduplicate: true,
        }
    }
}

/// Complete configuration for a merge run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit input files, in merge order.
    pub files: Vec<PathBuf>,

    /// Folders to scan for PDF files, in scan order.
    pub folders: Vec<PathBuf>,

    /// Descend into subfolders while scanning.
    pub recursive: bool,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Dry run mode - list resolved inputs without writing.
    pub dry_run: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Print a JSON run report instead of the human-readable listing.
    pub json: bool,

    /// Compression and deduplication switches.
    pub options: MergeOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            folders: Vec::new(),
            recursive: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
            verbose: false,
            quiet: false,
            json: false,
            options: MergeOptions::default(),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet modes are both enabled
    /// - The output path is empty
    /// - The output path is also listed as an explicit input
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(PdfMcError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        if self.output.as_os_str().is_empty() {
            return Err(PdfMcError::invalid_config("Output path cannot be empty"));
        }

        if self.files.iter().any(|input| same_location(input, &self.output)) {
            return Err(PdfMcError::invalid_config(format!(
                "Output file cannot be the same as an input file: {}",
                self.output.display()
            )));
        }

        Ok(())
    }

    /// Check if informational output should be displayed.
    ///
    /// Dry runs always print, since the listing is their only product.
    pub fn should_print(&self) -> bool {
        !self.quiet || self.dry_run
    }
}
