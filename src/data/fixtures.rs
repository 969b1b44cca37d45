// fixtures.rs - Sample PDFs shared by unit and integration tests

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

/// A document with one page per label. Resources and MediaBox live on the
/// Pages node so every page inherits them. Returns the page ids in order.
pub fn sample_document(labels: &[&str]) -> (Document, Vec<ObjectId>) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids = Vec::new();
    for label in labels {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), Object::Integer(24)]),
                Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                Operation::new("Tj", vec![Object::string_literal(*label)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    (doc, page_ids)
}

/// Write a PDF with one page per label
pub fn write_sample_pdf(path: &Path, labels: &[&str]) {
    let (mut doc, _) = sample_document(labels);
    doc.save(path).unwrap();
}

/// Write a PDF with one bookmark per page, titled by its label, plus a
/// `/Dests` entry `<label>` and a named destination `named-<label>` for
/// every page.
pub fn write_outlined_pdf(path: &Path, labels: &[&str]) {
    let (mut doc, page_ids) = sample_document(labels);
    let outlines_id = doc.new_object_id();
    let item_ids: Vec<ObjectId> = page_ids.iter().map(|_| doc.new_object_id()).collect();

    let mut dests = Dictionary::new();
    let mut names = Vec::new();
    for (index, (label, page_id)) in labels.iter().zip(&page_ids).enumerate() {
        let target = || Object::Array(vec![Object::Reference(*page_id), "Fit".into()]);
        let mut item = dictionary! {
            "Title" => Object::string_literal(*label),
            "Parent" => outlines_id,
            "Dest" => target(),
        };
        if index > 0 {
            item.set("Prev", item_ids[index - 1]);
        }
        if let Some(next) = item_ids.get(index + 1) {
            item.set("Next", *next);
        }
        doc.objects.insert(item_ids[index], Object::Dictionary(item));

        dests.set(label.as_bytes().to_vec(), target());
        names.push(Object::string_literal(format!("named-{label}")));
        names.push(target());
    }

    if let (Some(first), Some(last)) = (item_ids.first(), item_ids.last()) {
        doc.objects.insert(
            outlines_id,
            Object::Dictionary(dictionary! {
                "Type" => "Outlines",
                "First" => *first,
                "Last" => *last,
                "Count" => item_ids.len() as i64,
            }),
        );
    }

    let root_id = doc.trailer.get(b"Root").and_then(Object::as_reference).unwrap();
    let catalog = doc.get_object_mut(root_id).and_then(Object::as_dict_mut).unwrap();
    catalog.set("Outlines", outlines_id);
    catalog.set("Dests", dests);
    catalog.set("Names", dictionary! { "Dests" => dictionary! { "Names" => names } });
    doc.save(path).unwrap();
}

/// Load the PDF at `path`, let `edit` change its trailer and save it back
pub fn rewrite_trailer<F: FnOnce(&mut Dictionary)>(path: &Path, edit: F) {
    let mut doc = Document::load(path).unwrap();
    edit(&mut doc.trailer);
    doc.save(path).unwrap();
}

/// The label drawn on each page, in page order
pub fn page_labels(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
            content
                .operations
                .iter()
                .find(|op| op.operator == "Tj")
                .and_then(|op| op.operands.first())
                .and_then(|operand| operand.as_str().ok())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default()
        })
        .collect()
}

/// Top-level bookmark titles, in order
pub fn outline_titles(path: &Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    let Ok(root) = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Outlines"))
        .and_then(Object::as_reference)
        .and_then(|id| doc.get_object(id))
        .and_then(Object::as_dict)
    else {
        return Vec::new();
    };

    let mut titles = Vec::new();
    let mut next = root.get(b"First").and_then(Object::as_reference).ok();
    while let Some(id) = next {
        let item = doc.get_object(id).and_then(Object::as_dict).unwrap();
        let title = item.get(b"Title").and_then(Object::as_str).unwrap();
        titles.push(String::from_utf8_lossy(title).into_owned());
        next = item.get(b"Next").and_then(Object::as_reference).ok();
    }
    titles
}
