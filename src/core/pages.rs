// pages.rs - Page extraction for the combined page tree

use std::collections::HashSet;

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Page attributes a page may take from an ancestor Pages node
pub const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Object types rebuilt by the merger rather than copied from a source
const STRUCTURAL_TYPES: [&[u8]; 3] = [b"Catalog", b"Pages", b"Page"];

/// Copy a page dictionary and fill in inherited attributes from its ancestors.
///
/// The merged tree has a single flat Pages node, so anything a page relied on
/// inheriting must be carried on the page itself. Returns `None` when the
/// object is missing or not a dictionary.
pub fn flatten_page(document: &Document, page_id: ObjectId) -> Option<Dictionary> {
    let mut page = document.get_object(page_id).and_then(Object::as_dict).ok()?.clone();

    let mut missing: Vec<&[u8]> = INHERITABLE_KEYS
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut visited = HashSet::new();

    while let Some(node_id) = parent {
        // Guard against malformed trees whose Parent chain loops
        if missing.is_empty() || !visited.insert(node_id) {
            break;
        }
        let Ok(node) = document.get_object(node_id).and_then(Object::as_dict) else {
            break;
        };
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                page.set(key.to_vec(), value.clone());
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    page.remove(b"Parent");
    Some(page)
}

/// True for catalog and page-tree objects
pub fn is_structural(object: &Object) -> bool {
    match object.type_name() {
        Ok(name) => STRUCTURAL_TYPES.iter().any(|kind| *kind == name.as_bytes()),
        Err(_) => false,
    }
}
