//! Core PDF merging implementation.
//!
//! Every input is opened, stripped of its document metadata, renumbered
//! above the objects already collected, and has its pages prepared
//! (inherited attributes flattened, contents optionally compressed). Its
//! objects then join the collection, minus the catalog, page-tree nodes and
//! outlines. Once all inputs are in, a fresh catalog and a single page-tree
//! node adopt every page in input order.
//!
//! A file that cannot be opened is reported and skipped; it contributes
//! nothing and the merge continues with the next file.

use lopdf::{Document, Object, ObjectId, dictionary};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::MergeOptions;
use crate::error::{PdfMcError, Result};
use crate::io::PdfReader;
use crate::merge::dedup;
use crate::merge::metadata::MetadataManager;
use crate::merge::pages::PageProcessor;
use crate::output::{MergeEvent, Reporter};
use crate::utils::format_file_size;

/// Version written when no input says otherwise.
const DEFAULT_VERSION: &str = "1.5";

/// Statistics about a merge operation.
#[derive(Debug, Clone, Default)]
pub struct MergeStatistics {
    /// Number of PDFs successfully merged.
    pub files_merged: usize,

    /// Number of PDFs skipped because they could not be opened.
    pub files_skipped: usize,

    /// Total number of pages in merged document.
    pub total_pages: usize,

    /// Page content streams Flate-encoded during the merge.
    pub streams_compressed: usize,

    /// Objects folded away by deduplication.
    pub duplicates_removed: usize,

    /// Indirect objects after pruning, before deduplication.
    pub objects_before_dedup: usize,

    /// Indirect objects in the final document.
    pub object_count: usize,

    /// Total size of merged input files.
    pub input_size: u64,

    /// Total time taken for merge.
    pub merge_time: Duration,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
#[derive(Debug)]
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged.
    pub merged_files: Vec<PathBuf>,

    /// Why each skipped file was skipped, in input order.
    pub failures: Vec<PdfMcError>,
}

/// One input, ready to join the merged document.
struct ImportedPdf {
    page_ids: Vec<ObjectId>,
    objects: BTreeMap<ObjectId, Object>,
    max_id: u32,
    version: String,
    file_size: u64,
    streams_compressed: usize,
}

/// Objects and pages collected so far.
#[derive(Default)]
struct Collection {
    objects: BTreeMap<ObjectId, Object>,
    page_ids: Vec<ObjectId>,
    max_id: u32,
    version: Option<String>,
}

impl Collection {
    fn next_id(&self) -> u32 {
        self.max_id + 1
    }

    fn append(&mut self, imported: ImportedPdf) {
        self.objects.extend(imported.objects);
        self.page_ids.extend(imported.page_ids);
        self.max_id = self.max_id.max(imported.max_id);

        let newer = self
            .version
            .as_deref()
            .is_none_or(|current| imported.version.as_str() > current);
        if newer {
            self.version = Some(imported.version);
        }
    }

    /// Build the final document around the collected pages.
    fn into_document(self) -> Document {
        let version = self.version.as_deref().unwrap_or(DEFAULT_VERSION);
        let mut document = Document::with_version(version);
        document.objects = self.objects;
        document.max_id = self.max_id;

        let pages_id = document.new_object_id();
        for &page_id in &self.page_ids {
            if let Ok(page) = document.get_dictionary_mut(page_id) {
                page.set("Parent", pages_id);
            }
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| id.into()).collect();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => self.page_ids.len() as i64,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        document
    }
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Page preparation.
    pages: PageProcessor,

    /// Metadata stripping.
    metadata: MetadataManager,

    /// Compression and deduplication switches.
    options: MergeOptions,
}

impl Merger {
    /// Create a new merger with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with the given options.
    pub fn with_options(options: MergeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Merge `paths`, in order, into one document.
    ///
    /// Progress is reported through `reporter`: one event per file plus a
    /// start and a finish event, and one error for every file skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMcError::EmptyDocument`] if no page was collected,
    /// whether because `paths` is empty, every file failed to open, or
    /// every file that opened had no pages.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfmc::merge::Merger;
    /// # use pdfmc::output::RecordingReporter;
    /// # use std::path::PathBuf;
    /// let merger = Merger::new();
    /// let reporter = RecordingReporter::new();
    /// let result = merger.merge(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")], &reporter)?;
    /// println!("Merged {} files into {} pages",
    ///          result.statistics.files_merged,
    ///          result.statistics.total_pages);
    /// # Ok::<(), pdfmc::PdfMcError>(())
    /// ```
    pub fn merge(&self, paths: &[PathBuf], reporter: &dyn Reporter) -> Result<MergeResult> {
        let merge_start = Instant::now();
        let total = paths.len();
        let mut collection = Collection::default();
        let mut statistics = MergeStatistics::default();
        let mut merged_files = Vec::new();
        let mut failures = Vec::new();

        reporter.event(&MergeEvent::Started { total });

        for (position, path) in paths.iter().enumerate() {
            let index = position + 1;
            reporter.event(&MergeEvent::FileStarted {
                index,
                total,
                path: path.clone(),
            });

            match self.import(path, collection.next_id()) {
                Ok(imported) => {
                    let pages = imported.page_ids.len();
                    statistics.files_merged += 1;
                    statistics.input_size += imported.file_size;
                    statistics.streams_compressed += imported.streams_compressed;
                    collection.append(imported);
                    merged_files.push(path.clone());

                    reporter.event(&MergeEvent::FileMerged {
                        index,
                        total,
                        path: path.clone(),
                        pages,
                    });
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "skipping input");
                    reporter.error(&err.to_string());
                    reporter.event(&MergeEvent::FileSkipped {
                        index,
                        total,
                        path: path.clone(),
                        reason: err.to_string(),
                    });
                    statistics.files_skipped += 1;
                    failures.push(err);
                }
            }
        }

        statistics.total_pages = collection.page_ids.len();
        reporter.event(&MergeEvent::Finished {
            files_merged: statistics.files_merged,
            pages: statistics.total_pages,
        });

        if collection.page_ids.is_empty() {
            return Err(PdfMcError::EmptyDocument);
        }

        let mut document = collection.into_document();
        self.metadata.clear_metadata(&mut document);
        let pruned = document.prune_objects();
        tracing::debug!(pruned = pruned.len(), "pruned unreferenced objects");
        statistics.objects_before_dedup = document.objects.len();

        if self.options.deduplicate {
            statistics.duplicates_removed = dedup::deduplicate(&mut document).objects_removed;
        }

        document.renumber_objects();
        statistics.object_count = document.objects.len();
        statistics.merge_time = merge_start.elapsed();
        tracing::debug!(
            input = %statistics.format_input_size(),
            objects_before = statistics.objects_before_dedup,
            objects_after = statistics.object_count,
            elapsed = ?statistics.merge_time,
            "merge finished"
        );

        Ok(MergeResult {
            document,
            statistics,
            merged_files,
            failures,
        })
    }

    /// Load one input and prepare its objects, numbered from `first_id`.
    fn import(&self, path: &Path, first_id: u32) -> Result<ImportedPdf> {
        let loaded = self.reader.load(path)?;
        let file_size = loaded.file_size;
        let mut doc = loaded.document;

        let info = self.metadata.get_metadata(&doc);
        if self.metadata.clear_metadata(&mut doc) > 0 {
            tracing::debug!(path = %path.display(), title = ?info.title, "dropped document metadata");
        }

        doc.renumber_objects_with(first_id);
        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

        let streams_compressed = self
            .prepare_pages(&mut doc, &page_ids)
            .map_err(|e| PdfMcError::failed_to_load_pdf(path.to_path_buf(), e.to_string()))?;

        let objects = if page_ids.is_empty() {
            BTreeMap::new()
        } else {
            doc.objects
                .into_iter()
                .filter(|(_, object)| !is_document_structure(object))
                .collect()
        };

        Ok(ImportedPdf {
            page_ids,
            objects,
            max_id: doc.max_id,
            version: doc.version,
            file_size,
            streams_compressed,
        })
    }

    fn prepare_pages(&self, doc: &mut Document, page_ids: &[ObjectId]) -> Result<usize> {
        let mut compressed = 0;

        for &page_id in page_ids {
            self.pages.flatten_inherited_attributes(doc, page_id)?;
            if self.options.compress {
                compressed += self.pages.compress_contents(doc, page_id)?;
            }
        }

        Ok(compressed)
    }
}

/// Objects replaced by the merged document's own structure.
fn is_document_structure(object: &Object) -> bool {
    let Object::Dictionary(dict) = object else {
        return false;
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Catalog" | b"Pages" | b"Outlines" | b"Outline")
    )
}
