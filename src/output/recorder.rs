//! In-memory reporter.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::{MergeEvent, Reporter};

/// One thing a [`RecordingReporter`] was told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A resolved input path.
    Resolved(PathBuf),
    /// An informational message.
    Info(String),
    /// A warning.
    Warning(String),
    /// An error.
    Error(String),
    /// A merge progress event.
    Event(MergeEvent),
}

/// Reporter that keeps every record, in order, for later inspection.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    records: RefCell<Vec<Record>>,
}

impl RecordingReporter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Resolved paths, in the order they were reported.
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.records
            .borrow()
            .iter()
            .filter_map(|record| match record {
                Record::Resolved(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    /// Warning messages.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(|record| match record {
            Record::Warning(message) => Some(message),
            _ => None,
        })
    }

    /// Error messages.
    pub fn errors(&self) -> Vec<String> {
        self.messages(|record| match record {
            Record::Error(message) => Some(message),
            _ => None,
        })
    }

    /// Merge events.
    pub fn events(&self) -> Vec<MergeEvent> {
        self.records
            .borrow()
            .iter()
            .filter_map(|record| match record {
                Record::Event(event) => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    fn messages<F>(&self, select: F) -> Vec<String>
    where
        F: Fn(&Record) -> Option<&String>,
    {
        self.records
            .borrow()
            .iter()
            .filter_map(|record| select(record).cloned())
            .collect()
    }

    fn push(&self, record: Record) {
        self.records.borrow_mut().push(record);
    }
}

impl Reporter for RecordingReporter {
    fn resolved(&self, path: &Path) {
        self.push(Record::Resolved(path.to_path_buf()));
    }

    fn info(&self, message: &str) {
        self.push(Record::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(Record::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Record::Error(message.to_string()));
    }

    fn event(&self, event: &MergeEvent) {
        self.push(Record::Event(event.clone()));
    }
}
