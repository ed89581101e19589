//! Input discovery for pdfmc.
//!
//! Turns the user's explicit file list and folder arguments into one ordered
//! list of candidate paths. Explicit files come first, in the order given,
//! followed by the PDF files found in each folder, folder by folder.
//!
//! Folder scans only keep regular files (symlinks are followed) whose name
//! ends in `.pdf`, case-insensitively. Entries are visited in file-name order
//! so the result does not depend on the file system's listing order. A folder
//! that cannot be read is reported and contributes nothing; a subfolder that
//! cannot be read is reported and the scan continues with its siblings.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmc::discovery::{collect, FolderScan};
//! use pdfmc::output::RecordingReporter;
//! use std::path::PathBuf;
//!
//! let reporter = RecordingReporter::new();
//! let discovery = collect(
//!     &[PathBuf::from("cover.pdf")],
//!     &[FolderScan::new("chapters", true)],
//!     &reporter,
//! );
//! for path in discovery.paths() {
//!     println!("{}", path.display());
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::PdfMcError;
use crate::output::Reporter;
use crate::utils::has_pdf_suffix;

/// A folder to scan and how deep to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderScan {
    /// Folder to list.
    pub path: PathBuf,
    /// Descend into subfolders.
    pub recursive: bool,
}

impl FolderScan {
    /// Create a scan request.
    pub fn new(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }
}

/// PDF files found below one folder, plus whatever went wrong on the way.
#[derive(Debug, Default)]
pub struct FolderListing {
    /// Matching files, in visit order.
    pub found: Vec<PathBuf>,
    /// Folder-level and entry-level failures.
    pub errors: Vec<PdfMcError>,
}

/// Result of collecting all inputs.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Explicit files, as given. They still need validating.
    pub explicit: Vec<PathBuf>,
    /// Files found by folder scans, already filtered.
    pub scanned: Vec<PathBuf>,
    /// Folder failures, in the order they happened.
    pub errors: Vec<PdfMcError>,
}

impl Discovery {
    /// All candidate paths: explicit files first, then scanned files.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.explicit
            .iter()
            .chain(self.scanned.iter())
            .cloned()
            .collect()
    }

    /// Total number of candidate paths.
    pub fn len(&self) -> usize {
        self.explicit.len() + self.scanned.len()
    }

    /// Whether nothing was found at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collect explicit files and the contents of every folder, in order.
///
/// Never fails as a whole: each folder error is passed to `reporter` and
/// recorded in [`Discovery::errors`], and that folder contributes nothing.
pub fn collect(files: &[PathBuf], folders: &[FolderScan], reporter: &dyn Reporter) -> Discovery {
    let mut discovery = Discovery {
        explicit: files.to_vec(),
        ..Default::default()
    };

    for scan in folders {
        let listing = scan_folder(scan);
        tracing::debug!(
            folder = %scan.path.display(),
            recursive = scan.recursive,
            found = listing.found.len(),
            errors = listing.errors.len(),
            "scanned folder"
        );

        for err in &listing.errors {
            reporter.error(&err.to_string());
        }

        discovery.scanned.extend(listing.found);
        discovery.errors.extend(listing.errors);
    }

    discovery
}

/// List the PDF files below one folder.
///
/// Without `recursive` only the folder's direct entries are considered.
pub fn scan_folder(scan: &FolderScan) -> FolderListing {
    let mut listing = FolderListing::default();

    if let Err(err) = check_folder(&scan.path) {
        listing.errors.push(err);
        return listing;
    }

    let max_depth = if scan.recursive { usize::MAX } else { 1 };
    let walker = WalkDir::new(&scan.path)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && has_pdf_suffix(entry.path()) {
                    listing.found.push(entry.into_path());
                }
            }
            Err(source) => {
                let path = source
                    .path()
                    .map_or_else(|| scan.path.clone(), Path::to_path_buf);
                listing.errors.push(PdfMcError::WalkFailed { path, source });
            }
        }
    }

    listing
}

fn check_folder(path: &Path) -> Result<(), PdfMcError> {
    let metadata = fs::metadata(path).map_err(|source| PdfMcError::FolderNotReadable {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(PdfMcError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}
