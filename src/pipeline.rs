//! One complete run: discover, validate, list, then merge or stop.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmc::config::Config;
//! use pdfmc::output::OutputFormatter;
//! use pdfmc::pipeline;
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     folders: vec![PathBuf::from("chapters")],
//!     dry_run: true,
//!     ..Default::default()
//! };
//! let formatter = OutputFormatter::from_config(&config);
//! let report = pipeline::run(&config, &formatter)?;
//! assert!(report.merge.is_none());
//! # Ok::<(), pdfmc::PdfMcError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discovery::{self, FolderScan};
use crate::error::{PdfMcError, Result};
use crate::merge::{self, MergeOutcome};
use crate::output::{MergeSummary, Reporter, RunReport};
use crate::utils::normalize_path;
use crate::validation::Validator;

/// Resolve the inputs of `config` and, unless it is a dry run, merge them.
///
/// Every resolved path is passed to [`Reporter::resolved`] before any
/// merging starts. Folder errors, rejected files and unreadable PDFs are
/// reported and recorded in the returned report without stopping the run.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, if no page could be
/// collected ([`crate::PdfMcError::EmptyDocument`]), or if the output cannot
/// be written.
pub fn run(config: &Config, reporter: &dyn Reporter) -> Result<RunReport> {
    config.validate()?;

    let scans: Vec<FolderScan> = config
        .folders
        .iter()
        .map(|folder| FolderScan::new(folder, config.recursive))
        .collect();

    let mut discovery = discovery::collect(&config.files, &scans, reporter);
    let previous_output = exclude_output(&mut discovery.scanned, &config.output, reporter);
    let validation = Validator::new().validate(&discovery.explicit, reporter);

    let inputs: Vec<PathBuf> = validation
        .accepted
        .iter()
        .chain(discovery.scanned.iter())
        .cloned()
        .collect();
    tracing::debug!(
        explicit = discovery.explicit.len(),
        accepted = validation.accepted.len(),
        scanned = discovery.scanned.len(),
        "resolved inputs"
    );

    for path in &inputs {
        reporter.resolved(path);
    }

    let mut report = RunReport::new(config.dry_run, inputs);
    report.record(&discovery.errors);
    report.record(&previous_output);
    report.record(&validation.rejected);

    if config.dry_run {
        return Ok(report);
    }

    let MergeOutcome {
        statistics,
        write,
        failures,
        ..
    } = merge::merge_files(&report.files, &config.output, config.options, reporter)?;

    report.record(&failures);
    report.output = Some(write.output_path.clone());
    report.merge = Some(MergeSummary::new(&statistics, &write));

    Ok(report)
}

/// Remove every scanned path at the output location.
///
/// Each removal is reported as a warning and returned as an issue.
fn exclude_output(
    scanned: &mut Vec<PathBuf>,
    output: &Path,
    reporter: &dyn Reporter,
) -> Vec<PdfMcError> {
    let output = normalize_path(output);
    let mut excluded = Vec::new();

    scanned.retain(|path| {
        if normalize_path(path) != output {
            return true;
        }
        let err = PdfMcError::OutputIsInput { path: path.clone() };
        reporter.warning(&err.to_string());
        excluded.push(err);
        false
    });

    excluded
}
