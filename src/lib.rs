//! pdfmc - Merge PDF files from explicit paths and folders into one document.
//!
//! This library resolves a list of input PDFs (explicit files first, then the
//! contents of scanned folders), drops inputs that are missing or not PDFs,
//! and merges the pages of the rest, in order, into a single document. The
//! output carries no document metadata; page content streams are
//! Flate-encoded and identical objects are stored once unless disabled.
//!
//! Problems with individual inputs never stop a run. They are reported
//! through a [`output::Reporter`] and collected in the returned
//! [`output::RunReport`].
//!
//! # Examples
//!
//! ## Complete Run
//!
//! ```no_run
//! use pdfmc::config::Config;
//! use pdfmc::output::OutputFormatter;
//! use pdfmc::pipeline;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     files: vec![PathBuf::from("cover.pdf")],
//!     folders: vec![PathBuf::from("chapters")],
//!     recursive: true,
//!     output: PathBuf::from("book.pdf"),
//!     ..Default::default()
//! };
//!
//! let formatter = OutputFormatter::from_config(&config);
//! let report = pipeline::run(&config, &formatter)?;
//! println!("{} issues", report.issues.len());
//! # Ok::<(), pdfmc::PdfMcError>(())
//! ```
//!
//! ## Using Individual Components
//!
//! ```no_run
//! use pdfmc::config::MergeOptions;
//! use pdfmc::merge::merge_files;
//! use pdfmc::output::RecordingReporter;
//! use std::path::{Path, PathBuf};
//!
//! let reporter = RecordingReporter::new();
//! let outcome = merge_files(
//!     &[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     Path::new("merged.pdf"),
//!     MergeOptions::default(),
//!     &reporter,
//! )?;
//! println!("Created {} page document", outcome.statistics.total_pages);
//! # Ok::<(), pdfmc::PdfMcError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use error::{PdfMcError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
