//! Error types for pdfmc.
//!
//! Every failure in the crate is a [`PdfMcError`]. Errors fall into the
//! classes described by [`ErrorClass`]: per-item problems (an unreadable
//! folder, a rejected path, a PDF that will not open) are recovered where
//! they happen and only reported, while write failures abort the run.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Result type alias for pdfmc operations.
pub type Result<T> = std::result::Result<T, PdfMcError>;

/// Broad category of an error, used to decide how the pipeline reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClass {
    /// A folder could not be listed or walked.
    Discovery,
    /// An explicit input path was rejected before merging.
    Validation,
    /// An input file could not be opened by the PDF codec.
    Open,
    /// The output document could not be produced or written.
    Write,
    /// The configuration is unusable.
    Config,
    /// Anything else.
    Other,
}

/// Main error type for pdfmc operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMcError {
    /// A folder argument could not be read.
    #[error("Cannot read folder: {}\n  Reason: {source}", path.display())]
    FolderNotReadable {
        /// Folder that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A folder argument exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Path given as a folder.
        path: PathBuf,
    },

    /// An entry below a folder could not be visited.
    #[error("Failed to scan folder entry: {}\n  Reason: {source}", path.display())]
    WalkFailed {
        /// Entry that could not be visited, or the scanned folder when the
        /// walker does not name one.
        path: PathBuf,
        /// Error reported by the directory walker.
        source: walkdir::Error,
    },

    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Input file name does not end in `.pdf`.
    #[error("Not a PDF file name (expected a .pdf suffix): {}", path.display())]
    NotAPdf {
        /// Offending path.
        path: PathBuf,
    },

    /// A scanned file is the output of this run.
    #[error("Skipping the output file found among the inputs: {}", path.display())]
    OutputIsInput {
        /// Path of the scanned file.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// The merged document has no pages, so there is nothing to write.
    #[error("No pages to write: none of the inputs contributed a page")]
    EmptyDocument,

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Merge operation failed.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfMcError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfMcError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a NotAPdf error.
    pub fn not_a_pdf(path: PathBuf) -> Self {
        Self::NotAPdf { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Category of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::FolderNotReadable { .. } | Self::NotADirectory { .. } | Self::WalkFailed { .. } => {
                ErrorClass::Discovery
            }
            Self::FileNotFound { .. }
            | Self::NotAFile { .. }
            | Self::NotAPdf { .. }
            | Self::OutputIsInput { .. } => ErrorClass::Validation,
            Self::FailedToLoadPdf { .. } => ErrorClass::Open,
            Self::EmptyDocument
            | Self::FailedToCreateOutput { .. }
            | Self::FailedToWrite { .. }
            | Self::MergeFailed { .. } => ErrorClass::Write,
            Self::InvalidConfig { .. } => ErrorClass::Config,
            Self::Io { .. } | Self::Other { .. } => ErrorClass::Other,
        }
    }

    /// The input or output path this error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FolderNotReadable { path, .. }
            | Self::NotADirectory { path }
            | Self::WalkFailed { path, .. }
            | Self::FileNotFound { path }
            | Self::NotAFile { path }
            | Self::NotAPdf { path }
            | Self::OutputIsInput { path }
            | Self::FailedToLoadPdf { path, .. }
            | Self::FailedToCreateOutput { path, .. }
            | Self::FailedToWrite { path, .. } => Some(path),
            Self::EmptyDocument
            | Self::MergeFailed { .. }
            | Self::InvalidConfig { .. }
            | Self::Io { .. }
            | Self::Other { .. } => None,
        }
    }

    /// Check if this error is recoverable (the run skips the item and continues).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.class(),
            ErrorClass::Discovery | ErrorClass::Validation | ErrorClass::Open
        )
    }

    /// Check if this error should stop all processing immediately.
    pub fn is_fatal(&self) -> bool {
        matches!(self.class(), ErrorClass::Write | ErrorClass::Config)
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FolderNotReadable { .. }
            | Self::NotADirectory { .. }
            | Self::WalkFailed { .. }
            | Self::FileNotFound { .. }
            | Self::NotAFile { .. }
            | Self::NotAPdf { .. }
            | Self::OutputIsInput { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io { .. } => 5,
            Self::EmptyDocument | Self::MergeFailed { .. } => 6,
            Self::InvalidConfig { .. } | Self::Other { .. } => 1,
        }
    }
}
