//! PDF merging.
//!
//! [`Merger`] combines inputs into one in-memory document; [`merge_files`]
//! also writes it out.

pub mod dedup;
pub mod merger;
pub mod metadata;
pub mod pages;

pub use dedup::{DedupStatistics, deduplicate};
pub use merger::{MergeResult, MergeStatistics, Merger};
pub use metadata::{DocumentInfo, MetadataManager};
pub use pages::PageProcessor;

use std::path::{Path, PathBuf};

use crate::config::MergeOptions;
use crate::error::{PdfMcError, Result};
use crate::io::{PdfWriter, WriteStatistics};
use crate::output::Reporter;

/// What [`merge_files`] produced.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Merge statistics.
    pub statistics: MergeStatistics,
    /// Write statistics.
    pub write: WriteStatistics,
    /// Files that contributed, in order.
    pub merged_files: Vec<PathBuf>,
    /// Files that were skipped and why.
    pub failures: Vec<PdfMcError>,
}

/// Merge `paths` in order and write the result to `output`.
///
/// # Errors
///
/// Returns [`PdfMcError::EmptyDocument`] when no page was collected, in
/// which case `output` is not created, or a write error if the output
/// cannot be produced.
pub fn merge_files(
    paths: &[PathBuf],
    output: &Path,
    options: MergeOptions,
    reporter: &dyn Reporter,
) -> Result<MergeOutcome> {
    let MergeResult {
        mut document,
        statistics,
        merged_files,
        failures,
    } = Merger::with_options(options).merge(paths, reporter)?;

    let write = PdfWriter::new().save(&mut document, output)?;

    Ok(MergeOutcome {
        statistics,
        write,
        merged_files,
        failures,
    })
}
