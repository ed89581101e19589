//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmc::io::reader::PdfReader;
//! use std::path::Path;
//!
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("document.pdf"))?;
//! println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
//! # Ok::<(), pdfmc::PdfMcError>(())
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMcError, Result};
use crate::utils::format_file_size;

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf, load_time: Duration) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            load_time,
            file_size,
        }
    }

    /// Format the file size as a human-readable string.
    pub fn format_file_size(&self) -> String {
        format_file_size(self.file_size)
    }
}

/// Opens input PDFs through lopdf.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// A document without pages loads successfully; it simply contributes
    /// nothing to a merge.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMcError::FailedToLoadPdf`] if the file cannot be read or
    /// is not a PDF lopdf can parse.
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let start = Instant::now();

        let doc = Document::load(&path_buf)
            .map_err(|e| PdfMcError::failed_to_load_pdf(path_buf.clone(), e.to_string()))?;

        let loaded = LoadedPdf::new(doc, path_buf, start.elapsed());
        tracing::debug!(
            path = %loaded.path.display(),
            pages = loaded.page_count,
            objects = loaded.document.objects.len(),
            size = %loaded.format_file_size(),
            elapsed = ?loaded.load_time,
            "loaded pdf"
        );

        Ok(loaded)
    }
}
