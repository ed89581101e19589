//! Integration tests for dry-run functionality.

use pdfmc::config::Config;
use pdfmc::output::RecordingReporter;
use pdfmc::pipeline;

use crate::common::{temp_dir, write_pdf};

#[test]
fn test_dry_run_lists_files_in_order() {
    let dir = temp_dir();
    let x = write_pdf(dir.path(), "x.pdf", 1, "X");
    let y = write_pdf(dir.path(), "y.pdf", 1, "Y");
    let output = dir.path().join("merged.pdf");

    let config = Config {
        files: vec![x.clone(), y.clone()],
        output: output.clone(),
        dry_run: true,
        ..Default::default()
    };
    let reporter = RecordingReporter::new();

    let report = pipeline::run(&config, &reporter).unwrap();

    assert_eq!(reporter.resolved_paths(), vec![x, y]);
    assert!(report.dry_run);
    assert!(report.merge.is_none());
    assert!(!output.exists(), "Output file should not be created in dry run");
}

#[test]
fn test_dry_run_includes_folder_contents() {
    let dir = temp_dir();
    let first = write_pdf(dir.path(), "docs/1.pdf", 1, "D");
    let second = write_pdf(dir.path(), "docs/2.pdf", 1, "D");
    let output = dir.path().join("merged.pdf");

    let config = Config {
        folders: vec![dir.path().join("docs")],
        output: output.clone(),
        dry_run: true,
        ..Default::default()
    };
    let reporter = RecordingReporter::new();

    pipeline::run(&config, &reporter).unwrap();

    assert_eq!(reporter.resolved_paths(), vec![first, second]);
    assert!(!output.exists());
}

#[test]
fn test_dry_run_does_not_open_files() {
    let dir = temp_dir();
    let not_really = dir.path().join("broken.pdf");
    std::fs::write(&not_really, b"not a pdf").unwrap();

    let config = Config {
        files: vec![not_really.clone()],
        output: dir.path().join("merged.pdf"),
        dry_run: true,
        ..Default::default()
    };
    let reporter = RecordingReporter::new();

    let report = pipeline::run(&config, &reporter).unwrap();

    assert_eq!(report.files, vec![not_really]);
    assert!(reporter.errors().is_empty());
}

#[test]
fn test_dry_run_report_serializes() {
    let dir = temp_dir();
    let x = write_pdf(dir.path(), "x.pdf", 1, "X");

    let config = Config {
        files: vec![x, dir.path().join("missing.pdf")],
        dry_run: true,
        json: true,
        ..Default::default()
    };
    let reporter = RecordingReporter::new();

    let report = pipeline::run(&config, &reporter).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["files"].as_array().unwrap().len(), 1);
    assert_eq!(value["issues"][0]["class"], "validation");
}
