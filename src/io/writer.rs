//! PDF writing and saving operations.
//!
//! The writer refuses a document without pages before touching the file
//! system. With atomic writes (the default) the document is serialized to
//! a sibling temporary file which is renamed over the target once complete,
//! so a failed write never leaves a truncated output behind.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmc::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let stats = writer.save(&mut doc, Path::new("output.pdf"))?;
//! println!("Wrote {} in {:?}", stats.format_file_size(), stats.write_time);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMcError, Result};
use crate::utils::format_file_size;

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_size: 64 * 1024,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes.
    pub fn non_atomic() -> Self {
        Self::with_options(WriteOptions {
            atomic: false,
            ..Default::default()
        })
    }

    /// Serialize `doc` to `path`.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document has no pages ([`PdfMcError::EmptyDocument`]); no file
    ///   is created in that case
    /// - The output file cannot be created
    /// - Serializing, flushing or renaming fails
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        if doc.get_pages().is_empty() {
            return Err(PdfMcError::EmptyDocument);
        }

        let start = Instant::now();
        let write_path = if self.options.atomic {
            temp_path_for(path)
        } else {
            path.to_path_buf()
        };

        let file = File::create(&write_path).map_err(|e| PdfMcError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;

        let written = self.write_to(doc, file, path).and_then(|()| {
            if self.options.atomic {
                fs::rename(&write_path, path).map_err(|e| PdfMcError::FailedToWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            }
            Ok(())
        });

        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&write_path) {
                tracing::debug!(path = %write_path.display(), error = %cleanup, "could not remove partial output");
            }
            return Err(err);
        }

        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let stats = WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        };
        tracing::debug!(
            path = %path.display(),
            size = %stats.format_file_size(),
            elapsed = ?stats.write_time,
            "wrote pdf"
        );

        Ok(stats)
    }

    fn write_to(&self, doc: &mut Document, file: File, path: &Path) -> Result<()> {
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer).map_err(|e| PdfMcError::FailedToWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

        writer.flush().map_err(|e| PdfMcError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Sibling path used while an atomic write is in progress.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
