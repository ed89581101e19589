//! Page-level preparation before pages move into the merged tree.
//!
//! Pages lose their original page-tree parents during a merge, so attributes
//! they inherited from those parents are copied onto the page itself first.
//! Page content streams are optionally re-encoded with Flate.

use lopdf::{Document, Object, ObjectId};

use crate::error::{PdfMcError, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
pub const INHERITABLE_ATTRIBUTES: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Upper bound on page-tree depth, guards against Parent cycles.
const MAX_TREE_DEPTH: usize = 256;

/// Page operations used by the merger.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageProcessor;

impl PageProcessor {
    /// Create a new page processor.
    pub fn new() -> Self {
        Self
    }

    /// Copy inherited attributes from the page's ancestors onto the page.
    ///
    /// Attributes the page already sets are left alone; for the rest the
    /// nearest ancestor that sets them wins. Returns how many attributes
    /// were copied.
    ///
    /// # Errors
    ///
    /// Returns an error if `page_id` is not a dictionary.
    pub fn flatten_inherited_attributes(&self, doc: &mut Document, page_id: ObjectId) -> Result<usize> {
        let page = doc
            .get_dictionary(page_id)
            .map_err(|e| PdfMcError::merge_failed(format!("Page {page_id:?} is unusable: {e}")))?;

        let mut missing: Vec<&[u8]> = INHERITABLE_ATTRIBUTES
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();
        let mut inherited: Vec<(&[u8], Object)> = Vec::new();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        let mut depth = 0;

        while let Some(parent_id) = parent {
            if missing.is_empty() || depth >= MAX_TREE_DEPTH {
                break;
            }
            let Ok(node) = doc.get_dictionary(parent_id) else {
                break;
            };

            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((*key, value.clone()));
                    false
                }
                Err(_) => true,
            });

            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
            depth += 1;
        }

        let copied = inherited.len();
        if copied > 0 {
            let page = doc
                .get_dictionary_mut(page_id)
                .map_err(|e| PdfMcError::merge_failed(format!("Page {page_id:?} is unusable: {e}")))?;
            for (key, value) in inherited {
                page.set(key, value);
            }
        }

        Ok(copied)
    }

    /// Flate-encode the page's content streams that are not encoded yet.
    ///
    /// Streams that already carry a filter are left untouched, and lopdf
    /// keeps the original bytes when compression would not shrink them.
    /// Returns how many streams ended up compressed.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails.
    pub fn compress_contents(&self, doc: &mut Document, page_id: ObjectId) -> Result<usize> {
        let mut compressed = 0;

        for content_id in doc.get_page_contents(page_id) {
            if let Ok(Object::Stream(stream)) = doc.get_object_mut(content_id) {
                if stream.dict.has(b"Filter") {
                    continue;
                }
                stream.compress()?;
                if stream.dict.has(b"Filter") {
                    compressed += 1;
                }
            }
        }

        Ok(compressed)
    }
}
