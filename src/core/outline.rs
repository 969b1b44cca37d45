// outline.rs - Bookmarks and named destinations carried across a merge

use std::collections::HashSet;

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};

/// Navigation data gathered from each appended document, in append order.
///
/// Outline items and destination targets keep the (already renumbered) ids
/// they had in their source, so they still point at the right pages once the
/// page tree is rebuilt.
#[derive(Debug, Default)]
pub struct Navigation {
    /// Top-level outline items of every source, in order
    items: Vec<ObjectId>,
    /// Open items at all levels, summed over the source outline roots
    open_count: i64,
    /// Catalog `/Dests` entries; the first document to define a name keeps it
    dests: Dictionary,
    /// Flattened `/Names /Dests` name-tree entries
    named: Vec<(Vec<u8>, Object)>,
}

/// Follow a reference, or take the object as it is
fn resolve<'a>(document: &'a Document, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Reference(id) => document.get_object(*id).and_then(Object::as_dict).ok(),
        other => other.as_dict().ok(),
    }
}

/// `first` and every item reachable through `/Next`
fn siblings(document: &Document, first: ObjectId) -> Vec<ObjectId> {
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(first);

    while let Some(id) = next {
        if !visited.insert(id) {
            break;
        }
        let Ok(item) = document.get_object(id).and_then(Object::as_dict) else {
            break;
        };
        items.push(id);
        next = item.get(b"Next").and_then(Object::as_reference).ok();
    }
    items
}

fn collect_name_tree(
    document: &Document,
    node: &Dictionary,
    visited: &mut HashSet<ObjectId>,
    out: &mut Vec<(Vec<u8>, Object)>,
) {
    if let Ok(names) = node.get(b"Names").and_then(Object::as_array) {
        for pair in names.chunks_exact(2) {
            if let Ok(key) = pair[0].as_str() {
                out.push((key.to_vec(), pair[1].clone()));
            }
        }
    }
    if let Ok(kids) = node.get(b"Kids").and_then(Object::as_array) {
        for kid in kids {
            let Ok(kid_id) = kid.as_reference() else {
                continue;
            };
            if !visited.insert(kid_id) {
                continue;
            }
            if let Ok(child) = document.get_object(kid_id).and_then(Object::as_dict) {
                collect_name_tree(document, child, visited, out);
            }
        }
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.dests.is_empty() && self.named.is_empty()
    }

    /// Top-level outline items gathered so far
    pub fn outline_len(&self) -> usize {
        self.items.len()
    }

    /// Record the outline and destinations of one source document
    pub fn collect(&mut self, document: &Document) {
        let Ok(catalog) = document.catalog() else {
            return;
        };

        let root = catalog
            .get(b"Outlines")
            .ok()
            .and_then(|outlines| resolve(document, outlines));
        if let Some(root) = root {
            if let Ok(first) = root.get(b"First").and_then(Object::as_reference) {
                let items = siblings(document, first);
                let open = root
                    .get(b"Count")
                    .and_then(Object::as_i64)
                    .map(i64::abs)
                    .unwrap_or(items.len() as i64);
                self.open_count += open;
                self.items.extend(items);
            }
        }

        if let Some(dests) = catalog.get(b"Dests").ok().and_then(|d| resolve(document, d)) {
            for (name, target) in dests.iter() {
                if !self.dests.has(name) {
                    self.dests.set(name.clone(), target.clone());
                }
            }
        }

        let tree = catalog
            .get(b"Names")
            .ok()
            .and_then(|names| resolve(document, names))
            .and_then(|names| names.get(b"Dests").ok())
            .and_then(|tree| resolve(document, tree));
        if let Some(tree) = tree {
            collect_name_tree(document, tree, &mut HashSet::new(), &mut self.named);
        }
    }

    /// Link the gathered outline items under one new root and write
    /// `/Outlines`, `/Dests` and `/Names` into `catalog`.
    pub fn install(self, document: &mut Document, catalog: &mut Dictionary) {
        let Navigation {
            items,
            open_count,
            dests,
            mut named,
        } = self;

        if let (Some(first), Some(last)) = (items.first().copied(), items.last().copied()) {
            let root_id = document.new_object_id();
            for (index, item_id) in items.iter().enumerate() {
                let Ok(item) = document.get_object_mut(*item_id).and_then(Object::as_dict_mut) else {
                    continue;
                };
                item.set("Parent", root_id);
                match index.checked_sub(1).map(|prev| items[prev]) {
                    Some(prev) => item.set("Prev", prev),
                    None => {
                        item.remove(b"Prev");
                    }
                }
                match items.get(index + 1) {
                    Some(next) => item.set("Next", *next),
                    None => {
                        item.remove(b"Next");
                    }
                }
            }
            document.objects.insert(
                root_id,
                Object::Dictionary(dictionary! {
                    "Type" => "Outlines",
                    "First" => first,
                    "Last" => last,
                    "Count" => open_count,
                }),
            );
            catalog.set("Outlines", root_id);
        }

        if !dests.is_empty() {
            catalog.set("Dests", dests);
        }

        if !named.is_empty() {
            // Name trees are sorted by key; the stable sort keeps the earliest
            // definition first so dedup drops the later ones
            named.sort_by(|a, b| a.0.cmp(&b.0));
            named.dedup_by(|later, earlier| later.0 == earlier.0);
            let names: Vec<Object> = named
                .into_iter()
                .flat_map(|(key, target)| [Object::string_literal(key), target])
                .collect();
            catalog.set("Names", dictionary! { "Dests" => dictionary! { "Names" => names } });
        }
    }
}
