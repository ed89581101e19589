//! Input validation for pdfmc.
//!
//! Explicitly named files are checked before merging: the path must exist,
//! be a regular file, and end in `.pdf` (any case). Every rejected path is
//! reported as a warning and dropped; the survivors keep their order.
//!
//! Folder scan results are already filtered by discovery and do not pass
//! through here.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmc::output::RecordingReporter;
//! use pdfmc::validation::Validator;
//! use std::path::PathBuf;
//!
//! let reporter = RecordingReporter::new();
//! let validation = Validator::new().validate(
//!     &[PathBuf::from("a.pdf"), PathBuf::from("notes.txt")],
//!     &reporter,
//! );
//! println!("{} accepted", validation.accepted.len());
//! ```

use std::path::{Path, PathBuf};

use crate::error::{PdfMcError, Result};
use crate::output::Reporter;
use crate::utils::has_pdf_suffix;

/// Outcome of validating a list of paths.
#[derive(Debug, Default)]
pub struct Validation {
    /// Paths that passed, in input order.
    pub accepted: Vec<PathBuf>,
    /// Why each other path was dropped, in input order.
    pub rejected: Vec<PdfMcError>,
}

impl Validation {
    /// Whether every path passed.
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validator for explicitly named input files.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Check a single path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing exists at `path`
    /// - It exists but is not a regular file
    /// - Its name does not end in `.pdf`
    pub fn check(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PdfMcError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PdfMcError::not_a_file(path.to_path_buf()));
        }

        if !has_pdf_suffix(path) {
            return Err(PdfMcError::not_a_pdf(path.to_path_buf()));
        }

        Ok(())
    }

    /// Filter `paths` down to the usable ones.
    ///
    /// Each rejection is passed to `reporter` as a warning.
    pub fn validate(&self, paths: &[PathBuf], reporter: &dyn Reporter) -> Validation {
        let mut validation = Validation::default();

        for path in paths {
            match self.check(path) {
                Ok(()) => validation.accepted.push(path.clone()),
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "rejected input");
                    reporter.warning(&err.to_string());
                    validation.rejected.push(err);
                }
            }
        }

        validation
    }
}
