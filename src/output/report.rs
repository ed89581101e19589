//! Machine-readable summary of a run, printed with `--json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::error::{ErrorClass, PdfMcError, Result};
use crate::io::WriteStatistics;
use crate::merge::MergeStatistics;

/// One problem encountered during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Path the problem concerns, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Broad category.
    pub class: ErrorClass,
    /// Human-readable description.
    pub message: String,
}

impl From<&PdfMcError> for Issue {
    fn from(err: &PdfMcError) -> Self {
        Self {
            path: err.path().map(Path::to_path_buf),
            class: err.class(),
            message: err.to_string(),
        }
    }
}

/// Numbers describing a completed merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Files that contributed pages.
    pub files_merged: usize,
    /// Files that failed to open.
    pub files_skipped: usize,
    /// Pages in the output.
    pub pages: usize,
    /// Indirect objects before deduplication.
    pub objects_before_dedup: usize,
    /// Indirect objects in the output.
    pub objects: usize,
    /// Objects collapsed by deduplication.
    pub duplicates_removed: usize,
    /// Content streams that ended up Flate-encoded by the merge.
    pub streams_compressed: usize,
    /// Combined size of the inputs that contributed.
    pub bytes_read: u64,
    /// Size of the written file.
    pub bytes_written: u64,
    /// Time spent loading and merging, in milliseconds.
    pub merge_ms: u64,
    /// Time spent serializing the output, in milliseconds.
    pub write_ms: u64,
}

impl MergeSummary {
    /// Combine merge and write statistics.
    pub fn new(merge: &MergeStatistics, write: &WriteStatistics) -> Self {
        Self {
            files_merged: merge.files_merged,
            files_skipped: merge.files_skipped,
            pages: merge.total_pages,
            objects_before_dedup: merge.objects_before_dedup,
            objects: merge.object_count,
            duplicates_removed: merge.duplicates_removed,
            streams_compressed: merge.streams_compressed,
            bytes_read: merge.input_size,
            bytes_written: write.file_size,
            merge_ms: millis(merge.merge_time),
            write_ms: millis(write.write_time),
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Everything a run resolved, rejected and produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Output path; absent for dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Inputs that survived discovery and validation, in merge order.
    pub files: Vec<PathBuf>,
    /// Problems reported along the way.
    pub issues: Vec<Issue>,
    /// Merge results; absent for dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeSummary>,
}

impl RunReport {
    /// Start a report for the resolved `files`.
    pub fn new(dry_run: bool, files: Vec<PathBuf>) -> Self {
        Self {
            dry_run,
            output: None,
            files,
            issues: Vec::new(),
            merge: None,
        }
    }

    /// Record every error in `errors` as an issue.
    pub fn record<'a, I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = &'a PdfMcError>,
    {
        self.issues.extend(errors.into_iter().map(Issue::from));
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PdfMcError::other(format!("Failed to serialize run report: {e}")))
    }
}
