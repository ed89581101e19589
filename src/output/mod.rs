//! Output and progress reporting for pdfmc.
//!
//! Nothing in the library prints directly. Every component that has
//! something to tell the user takes a [`Reporter`] and speaks through it:
//! resolved paths and progress go to the informational side, rejected
//! inputs and failures go to the diagnostic side.
//!
//! Two implementations ship with the crate:
//!
//! - [`OutputFormatter`] writes to the terminal (stdout for information,
//!   stderr for warnings and errors).
//! - [`RecordingReporter`] keeps everything in memory so callers and tests
//!   can inspect what happened.
//!
//! # Examples
//!
//! ```
//! use pdfmc::output::{RecordingReporter, Reporter};
//! use std::path::Path;
//!
//! let reporter = RecordingReporter::new();
//! reporter.resolved(Path::new("a.pdf"));
//! reporter.warning("skipping b.txt");
//! assert_eq!(reporter.resolved_paths(), vec![Path::new("a.pdf").to_path_buf()]);
//! assert_eq!(reporter.warnings().len(), 1);
//! ```

pub mod formatter;
pub mod recorder;
pub mod report;

pub use formatter::{MessageLevel, OutputFormatter};
pub use recorder::{Record, RecordingReporter};
pub use report::{Issue, MergeSummary, RunReport};

use std::path::{Path, PathBuf};

/// Progress of a merge, one event per step.
///
/// `index` is 1-based and `total` is the number of files handed to the
/// merger, so a caller can render `[index/total]` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    /// The merge is about to process `total` files.
    Started {
        /// Number of files to process.
        total: usize,
    },
    /// A file is being opened.
    FileStarted {
        /// Position of the file (1-based).
        index: usize,
        /// Number of files in the merge.
        total: usize,
        /// File being processed.
        path: PathBuf,
    },
    /// A file's pages were appended to the output.
    FileMerged {
        /// Position of the file (1-based).
        index: usize,
        /// Number of files in the merge.
        total: usize,
        /// File that was merged.
        path: PathBuf,
        /// Pages it contributed.
        pages: usize,
    },
    /// A file could not be used and contributed nothing.
    FileSkipped {
        /// Position of the file (1-based).
        index: usize,
        /// Number of files in the merge.
        total: usize,
        /// File that was skipped.
        path: PathBuf,
        /// Why it was skipped.
        reason: String,
    },
    /// All files have been processed.
    Finished {
        /// Files that contributed to the output.
        files_merged: usize,
        /// Pages in the output document.
        pages: usize,
    },
}

/// Sink for everything a run wants to tell its caller.
pub trait Reporter {
    /// A path that made it through discovery and validation.
    fn resolved(&self, path: &Path);

    /// General informational message.
    fn info(&self, message: &str);

    /// A recoverable problem, such as a rejected input path.
    fn warning(&self, message: &str);

    /// A failure that cost an item (a folder or file), or the whole run.
    fn error(&self, message: &str);

    /// A step of the merge.
    fn event(&self, event: &MergeEvent);
}
