//! Structural deduplication of indirect objects.
//!
//! Two objects are duplicates when they have the same value, compared by
//! content with dictionary keys in sorted order and references compared by
//! object id. Every duplicate is folded into the lowest-numbered object of
//! its group and all references (including the trailer's) are rewritten.
//! Folding can make referencing objects identical in turn, so passes repeat
//! until one finds nothing.
//!
//! Page, page-tree and catalog dictionaries are never folded: two pages may
//! be identical and still both belong in the output.

use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use lopdf::{Dictionary, Document, Object, ObjectId};

/// What a deduplication run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStatistics {
    /// Passes that found something to fold.
    pub passes: usize,
    /// Objects removed in total.
    pub objects_removed: usize,
}

/// Fold structurally identical objects in `doc` until none are left.
pub fn deduplicate(doc: &mut Document) -> DedupStatistics {
    let mut stats = DedupStatistics::default();

    loop {
        let replacements = find_duplicates(doc);
        if replacements.is_empty() {
            break;
        }

        for duplicate in replacements.keys() {
            doc.objects.remove(duplicate);
        }
        for object in doc.objects.values_mut() {
            remap_references(object, &replacements);
        }
        remap_dictionary(&mut doc.trailer, &replacements);

        stats.passes += 1;
        stats.objects_removed += replacements.len();
        tracing::debug!(pass = stats.passes, folded = replacements.len(), "deduplication pass");
    }

    stats
}

/// Map from each duplicate to the object it folds into.
fn find_duplicates(doc: &Document) -> BTreeMap<ObjectId, ObjectId> {
    let mut canonical: HashMap<Vec<u8>, ObjectId> = HashMap::new();
    let mut replacements = BTreeMap::new();

    // objects is ordered by id, so the first of each group is the lowest
    for (&id, object) in &doc.objects {
        if is_page_structure(object) {
            continue;
        }

        let mut key = Vec::new();
        fingerprint(object, &mut key);

        match canonical.entry(key) {
            Entry::Occupied(entry) => {
                replacements.insert(id, *entry.get());
            }
            Entry::Vacant(entry) => {
                entry.insert(id);
            }
        }
    }

    replacements
}

fn is_page_structure(object: &Object) -> bool {
    let Object::Dictionary(dict) = object else {
        return false;
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Page" | b"Pages" | b"Catalog")
    )
}

/// Append an unambiguous encoding of `object` to `out`.
///
/// Every value starts with a tag byte and every variable-length part is
/// length-prefixed, so distinct values never share an encoding.
fn fingerprint(object: &Object, out: &mut Vec<u8>) {
    match object {
        Object::Null => out.push(b'n'),
        Object::Boolean(value) => {
            out.push(b'b');
            out.push(u8::from(*value));
        }
        Object::Integer(value) => {
            out.push(b'i');
            out.extend_from_slice(&value.to_le_bytes());
        }
        Object::Real(value) => {
            out.push(b'r');
            out.extend_from_slice(&value.to_bits().to_le_bytes());
        }
        Object::Name(name) => {
            out.push(b'/');
            push_bytes(out, name);
        }
        Object::String(bytes, _) => {
            out.push(b's');
            push_bytes(out, bytes);
        }
        Object::Array(items) => {
            out.push(b'[');
            push_len(out, items.len());
            for item in items {
                fingerprint(item, out);
            }
        }
        Object::Dictionary(dict) => fingerprint_dictionary(dict, out),
        Object::Stream(stream) => {
            out.push(b'S');
            fingerprint_dictionary(&stream.dict, out);
            push_bytes(out, &stream.content);
        }
        Object::Reference((number, generation)) => {
            out.push(b'R');
            out.extend_from_slice(&number.to_le_bytes());
            out.extend_from_slice(&generation.to_le_bytes());
        }
    }
}

fn fingerprint_dictionary(dict: &Dictionary, out: &mut Vec<u8>) {
    let mut entries: Vec<(&Vec<u8>, &Object)> = dict.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    out.push(b'<');
    push_len(out, entries.len());
    for (key, value) in entries {
        push_bytes(out, key);
        fingerprint(value, out);
    }
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    out.extend_from_slice(&(len as u64).to_le_bytes());
}

fn push_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    push_len(out, bytes.len());
    out.extend_from_slice(bytes);
}

fn remap_references(object: &mut Object, replacements: &BTreeMap<ObjectId, ObjectId>) {
    match object {
        Object::Reference(id) => {
            if let Some(target) = replacements.get(id) {
                *id = *target;
            }
        }
        Object::Array(items) => {
            for item in items {
                remap_references(item, replacements);
            }
        }
        Object::Dictionary(dict) => remap_dictionary(dict, replacements),
        Object::Stream(stream) => remap_dictionary(&mut stream.dict, replacements),
        _ => {}
    }
}

fn remap_dictionary(dict: &mut Dictionary, replacements: &BTreeMap<ObjectId, ObjectId>) {
    for (_, value) in dict.iter_mut() {
        remap_references(value, replacements);
    }
}
