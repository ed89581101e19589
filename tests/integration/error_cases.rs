//! Integration tests for error handling and edge cases.

use pdfmc::config::{Config, MergeOptions};
use pdfmc::error::PdfMcError;
use pdfmc::merge::merge_files;
use pdfmc::output::{MergeEvent, RecordingReporter};
use pdfmc::pipeline;

use crate::common::{page_labels, temp_dir, write_bytes, write_pdf};

#[test]
fn test_empty_input_list_creates_nothing() {
    let dir = temp_dir();
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    let err = merge_files(&[], &output, MergeOptions::default(), &reporter).unwrap_err();

    assert!(matches!(err, PdfMcError::EmptyDocument));
    assert_ne!(err.exit_code(), 0);
    assert!(!output.exists());
}

#[test]
fn test_corrupt_file_in_the_middle_is_skipped() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1, "A");
    let bad = write_bytes(dir.path(), "bad.pdf", b"definitely not a pdf");
    let c = write_pdf(dir.path(), "c.pdf", 2, "C");
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    let outcome = merge_files(&[a, bad.clone(), c], &output, MergeOptions::default(), &reporter)
        .unwrap();

    assert_eq!(page_labels(&output), vec!["A-1", "C-1", "C-2"]);
    assert_eq!(reporter.errors().len(), 1);
    assert!(reporter.errors()[0].contains("bad.pdf"));
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.statistics.files_skipped, 1);
    assert!(reporter.events().iter().any(|event| matches!(
        event,
        MergeEvent::FileSkipped { index: 2, total: 3, .. }
    )));
}

#[test]
fn test_zero_page_file_contributes_nothing() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1, "A");
    let empty = write_pdf(dir.path(), "z.pdf", 0, "Z");
    let b = write_pdf(dir.path(), "b.pdf", 2, "B");
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    let outcome =
        merge_files(&[a, empty, b], &output, MergeOptions::default(), &reporter).unwrap();

    assert_eq!(page_labels(&output), vec!["A-1", "B-1", "B-2"]);
    assert!(reporter.errors().is_empty());
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.statistics.files_skipped, 0);
    assert!(reporter.events().iter().any(|event| matches!(
        event,
        MergeEvent::FileMerged { index: 2, pages: 0, .. }
    )));
}

#[test]
fn test_only_zero_page_files_is_empty_document() {
    let dir = temp_dir();
    let empty = write_pdf(dir.path(), "z.pdf", 0, "Z");
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    let err = merge_files(&[empty], &output, MergeOptions::default(), &reporter).unwrap_err();

    assert!(matches!(err, PdfMcError::EmptyDocument));
    assert!(reporter.errors().is_empty());
    assert!(!output.exists());
}

#[test]
fn test_every_input_rejected_is_empty_document() {
    let dir = temp_dir();
    let notes = write_bytes(dir.path(), "notes.txt", b"hello");
    let output = dir.path().join("out.pdf");

    let config = Config {
        files: vec![notes, dir.path().join("missing.pdf")],
        output: output.clone(),
        ..Default::default()
    };
    let reporter = RecordingReporter::new();

    let err = pipeline::run(&config, &reporter).unwrap_err();

    assert!(matches!(err, PdfMcError::EmptyDocument));
    assert_eq!(reporter.warnings().len(), 2);
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_location() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1, "A");
    let output = dir.path().join("no").join("such").join("dir").join("out.pdf");
    let reporter = RecordingReporter::new();

    let err = merge_files(&[a], &output, MergeOptions::default(), &reporter).unwrap_err();

    assert!(matches!(err, PdfMcError::FailedToCreateOutput { .. }));
    assert!(err.is_fatal());
    assert!(!output.exists());
}

#[test]
fn test_output_same_as_input_is_rejected() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1, "A");

    let config = Config {
        files: vec![a.clone()],
        output: a,
        ..Default::default()
    };
    let reporter = RecordingReporter::new();

    let err = pipeline::run(&config, &reporter).unwrap_err();
    assert!(matches!(err, PdfMcError::InvalidConfig { .. }));
}
