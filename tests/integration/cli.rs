//! End-to-end tests that drive the `pdfmc` binary.

use std::path::Path;
use std::process::{Command, Output};

use crate::common::{page_labels, temp_dir, write_bytes, write_pdf};

fn pdfmc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdfmc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pdfmc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_dry_run_prints_only_paths() {
    let dir = temp_dir();
    write_pdf(dir.path(), "x.pdf", 1, "X");
    write_pdf(dir.path(), "y.pdf", 1, "Y");

    let output = pdfmc(dir.path(), &["--dry-run", "-i", "x.pdf", "y.pdf"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "x.pdf\ny.pdf\n");
    assert!(!dir.path().join("merged.pdf").exists());
}

#[test]
fn test_merge_writes_default_output() {
    let dir = temp_dir();
    write_pdf(dir.path(), "a.pdf", 2, "A");
    write_pdf(dir.path(), "docs/b.pdf", 1, "B");

    let output = pdfmc(dir.path(), &["-i", "a.pdf", "-f", "docs"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(page_labels(&dir.path().join("merged.pdf")), vec!["A-1", "A-2", "B-1"]);
}

#[test]
fn test_rerun_over_same_folder_does_not_merge_previous_output() {
    let dir = temp_dir();
    write_pdf(dir.path(), "a.pdf", 1, "A");

    for _ in 0..2 {
        let output = pdfmc(dir.path(), &["-q", "-f", "."]);
        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    }

    assert_eq!(page_labels(&dir.path().join("merged.pdf")), vec!["A-1"]);
}

#[test]
fn test_relative_spelling_of_input_as_output_is_rejected() {
    let dir = temp_dir();
    write_pdf(dir.path(), "a.pdf", 1, "A");

    let output = pdfmc(dir.path(), &["-i", "./a.pdf", "-o", "a.pdf"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(page_labels(&dir.path().join("a.pdf")), vec!["A-1"]);
}

#[test]
fn test_output_file_spellings() {
    let dir = temp_dir();
    write_pdf(dir.path(), "a.pdf", 1, "A");

    for (flag, name) in [("-o", "one.pdf"), ("--output_file", "two.pdf"), ("--output-file", "three.pdf")] {
        let output = pdfmc(dir.path(), &["-q", "-i", "a.pdf", flag, name]);
        assert!(output.status.success(), "{flag} failed");
        assert!(dir.path().join(name).exists(), "{flag} did not write {name}");
    }
}

#[test]
fn test_nothing_to_merge_fails() {
    let dir = temp_dir();
    write_bytes(dir.path(), "notes.txt", b"hello");

    let output = pdfmc(dir.path(), &["-i", "notes.txt"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(6));
    assert!(!dir.path().join("merged.pdf").exists());
}

#[test]
fn test_json_report() {
    let dir = temp_dir();
    write_pdf(dir.path(), "a.pdf", 3, "A");

    let output = pdfmc(dir.path(), &["--json", "-i", "a.pdf", "-o", "out.pdf"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["merge"]["pages"], 3);
    assert_eq!(value["dry_run"], false);
}

#[test]
fn test_version() {
    let dir = temp_dir();

    let output = pdfmc(dir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let dir = temp_dir();

    let output = pdfmc(dir.path(), &["-q", "-v", "-i", "a.pdf"]);

    assert!(!output.status.success());
}
