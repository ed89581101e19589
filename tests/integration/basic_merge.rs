//! Integration tests for merging.

use lopdf::Document;
use pdfmc::config::{Config, MergeOptions};
use pdfmc::merge::merge_files;
use pdfmc::output::RecordingReporter;
use pdfmc::pipeline;
use serial_test::serial;

use crate::common::{page_labels, temp_dir, write_pdf};

#[test]
fn test_merge_two_files_in_order() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 2, "A");
    let b = write_pdf(dir.path(), "b.pdf", 3, "B");
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    let outcome = merge_files(&[a, b], &output, MergeOptions::default(), &reporter).unwrap();

    assert_eq!(outcome.statistics.total_pages, 5);
    assert_eq!(outcome.statistics.files_merged, 2);
    assert_eq!(page_labels(&output), vec!["A-1", "A-2", "B-1", "B-2", "B-3"]);
}

#[test]
fn test_same_file_twice_keeps_both_copies() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 2, "A");
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    merge_files(&[a.clone(), a], &output, MergeOptions::default(), &reporter).unwrap();

    assert_eq!(page_labels(&output), vec!["A-1", "A-2", "A-1", "A-2"]);
}

#[test]
fn test_output_has_no_metadata() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1, "A");
    let output = dir.path().join("out.pdf");
    let reporter = RecordingReporter::new();

    merge_files(&[a], &output, MergeOptions::default(), &reporter).unwrap();

    let doc = Document::load(&output).unwrap();
    assert!(!doc.trailer.has(b"Info"));
    assert!(!doc.catalog().unwrap().has(b"Metadata"));
}

#[test]
fn test_deduplication_reduces_objects() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 2, "A");
    let b = write_pdf(dir.path(), "b.pdf", 2, "B");
    let inputs = vec![a, b];
    let reporter = RecordingReporter::new();

    let plain_path = dir.path().join("plain.pdf");
    let plain = merge_files(
        &inputs,
        &plain_path,
        MergeOptions {
            compress: true,
            deduplicate: false,
        },
        &reporter,
    )
    .unwrap();

    let dedup_path = dir.path().join("dedup.pdf");
    let dedup = merge_files(&inputs, &dedup_path, MergeOptions::default(), &reporter).unwrap();

    assert!(dedup.statistics.duplicates_removed > 0);
    assert!(dedup.statistics.object_count < plain.statistics.object_count);
    assert_eq!(page_labels(&plain_path), page_labels(&dedup_path));
}

#[test]
fn test_compression_reduces_size() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 3, "A");
    let reporter = RecordingReporter::new();

    let raw_path = dir.path().join("raw.pdf");
    let raw = merge_files(
        &[a.clone()],
        &raw_path,
        MergeOptions {
            compress: false,
            deduplicate: true,
        },
        &reporter,
    )
    .unwrap();

    let packed_path = dir.path().join("packed.pdf");
    let packed = merge_files(&[a], &packed_path, MergeOptions::default(), &reporter).unwrap();

    assert_eq!(packed.statistics.streams_compressed, 3);
    assert!(packed.write.file_size < raw.write.file_size);
    assert_eq!(page_labels(&packed_path), vec!["A-1", "A-2", "A-3"]);
}

#[test]
#[serial]
fn test_default_output_lands_in_working_directory() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", 1, "A");
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let config = Config {
        files: vec![a],
        ..Default::default()
    };
    let reporter = RecordingReporter::new();
    let result = pipeline::run(&config, &reporter);

    std::env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(report.merge.unwrap().pages, 1);
    assert!(dir.path().join("merged.pdf").exists());
}
