//! Sample documents for unit tests.

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::path::{Path, PathBuf};

/// Build a document with `pages` pages labelled `{label}-1`, `{label}-2`, ...
///
/// Resources and MediaBox live on the Pages node and are inherited. The
/// font and resource dictionaries are identical across documents built
/// here, the Info dictionary carries a title, and the catalog points at an
/// XMP metadata stream.
pub fn sample_document(pages: usize, label: &str) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for number in 1..=pages {
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            page_content(&format!("{label}-{number}")),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let metadata_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "Metadata",
            "Subtype" => "XML",
        },
        b"<x:xmpmeta xmlns:x=\"adobe:ns:meta/\"/>".to_vec(),
    ));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "Metadata" => metadata_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(format!("Document {label}")),
        "Author" => Object::string_literal("Sample Author"),
    });

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc
}

/// Save [`sample_document`] to `path` and return the path.
pub fn write_sample(path: &Path, pages: usize, label: &str) -> PathBuf {
    let mut doc = sample_document(pages, label);
    doc.save(path).unwrap();
    path.to_path_buf()
}

/// Page labels in page order, read back from the content streams.
pub fn page_labels(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .into_values()
        .map(|page_id| label_of(doc, page_id))
        .collect()
}

fn label_of(doc: &Document, page_id: ObjectId) -> String {
    let content = doc.get_page_content(page_id).unwrap();
    let text = String::from_utf8_lossy(&content);
    let start = text.find('(').unwrap() + 1;
    let end = text[start..].find(')').unwrap() + start;
    text[start..end].to_string()
}

/// A content stream that draws `label` plus enough line art to be worth
/// compressing.
fn page_content(label: &str) -> Vec<u8> {
    let mut content = format!("BT /F1 24 Tf 72 720 Td ({label}) Tj ET\n");
    for step in 0..40 {
        content.push_str(&format!("{} 100 m {} 400 l S\n", 72 + step * 10, 72 + step * 10));
    }
    content.into_bytes()
}
