//! PDF metadata management.
//!
//! Merged output carries no document-level metadata. This module removes
//! both kinds a source can bring along:
//! - the Info dictionary referenced from the trailer (Title, Author, ...)
//! - the XMP metadata stream referenced from the catalog

use lopdf::{Dictionary, Document, Object};

/// Document properties read from an Info dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
    /// Document subject.
    pub subject: Option<String>,
    /// Keywords.
    pub keywords: Option<String>,
    /// Application that created the original document.
    pub creator: Option<String>,
    /// Application that produced the PDF.
    pub producer: Option<String>,
}

impl DocumentInfo {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
            && self.creator.is_none()
            && self.producer.is_none()
    }
}

/// Manager for PDF metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataManager;

impl MetadataManager {
    /// Create a new metadata manager.
    pub fn new() -> Self {
        Self
    }

    /// Read the Info dictionary of a document.
    ///
    /// Returns an empty [`DocumentInfo`] when there is none.
    pub fn get_metadata(&self, doc: &Document) -> DocumentInfo {
        let Some(info) = Self::info_dictionary(doc) else {
            return DocumentInfo::default();
        };

        DocumentInfo {
            title: Self::get_string_field(info, b"Title"),
            author: Self::get_string_field(info, b"Author"),
            subject: Self::get_string_field(info, b"Subject"),
            keywords: Self::get_string_field(info, b"Keywords"),
            creator: Self::get_string_field(info, b"Creator"),
            producer: Self::get_string_field(info, b"Producer"),
        }
    }

    /// Remove the Info dictionary and the catalog's XMP stream.
    ///
    /// Returns the number of entries removed (0, 1 or 2).
    pub fn clear_metadata(&self, doc: &mut Document) -> usize {
        let mut removed = 0;

        if let Some(info) = doc.trailer.remove(b"Info") {
            if let Ok(info_id) = info.as_reference() {
                doc.objects.remove(&info_id);
            }
            removed += 1;
        }

        let xmp = doc
            .catalog_mut()
            .ok()
            .and_then(|catalog| catalog.remove(b"Metadata"));
        if let Some(xmp) = xmp {
            if let Ok(xmp_id) = xmp.as_reference() {
                doc.objects.remove(&xmp_id);
            }
            removed += 1;
        }

        removed
    }

    /// Check if a document has an Info dictionary or an XMP stream.
    pub fn has_metadata(&self, doc: &Document) -> bool {
        doc.trailer.has(b"Info")
            || doc
                .catalog()
                .map(|catalog| catalog.has(b"Metadata"))
                .unwrap_or(false)
    }

    fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
        match doc.trailer.get(b"Info").ok()? {
            Object::Reference(id) => doc.get_dictionary(*id).ok(),
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// Extract a string field from a dictionary.
    fn get_string_field(dict: &Dictionary, key: &[u8]) -> Option<String> {
        dict.get(key).ok().and_then(|obj| {
            if let Object::String(bytes, _) = obj {
                String::from_utf8(bytes.clone()).ok()
            } else {
                None
            }
        })
    }
}
