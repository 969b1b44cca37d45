// merger.rs - Page concatenation of PDF documents

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};
use tracing::{debug, info};

use crate::core::metadata::info_dictionary;
use crate::core::outline::Navigation;
use crate::core::pages::{flatten_page, is_structural};
use crate::core::request::MergeRequest;
use crate::data::SourceDocument;
use crate::error::PdfError;
use crate::output::write_document;

/// Knobs for how the merged document is assembled and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Replace an existing output file
    pub overwrite: bool,
    /// Flate-compress streams before writing
    pub compress: bool,
    /// Write Producer / CreationDate / ModDate
    pub stamp_metadata: bool,
    pub producer: String,
    /// Fail if the built page tree does not hold every appended page
    pub verify_page_count: bool,
    /// Carry bookmarks and named destinations of every input
    pub import_outlines: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            compress: true,
            stamp_metadata: true,
            producer: format!("resume-merge v{}", env!("CARGO_PKG_VERSION")),
            verify_page_count: true,
            import_outlines: true,
        }
    }
}

/// Pages contributed by one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub pages: usize,
}

/// What a successful write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub pages: usize,
    pub bytes: u64,
    pub sources: Vec<SourceSummary>,
}

/// Accumulates documents in append order and writes them as one PDF.
///
/// Each appended document has its objects renumbered past every id already
/// held, so objects from different inputs never collide. Pages are kept in
/// append order; the page tree and catalog are rebuilt on [`PdfMerger::build`],
/// with the inputs' bookmarks chained in the same order.
/// Dropping the merger at any point releases everything it holds.
#[derive(Debug)]
pub struct PdfMerger {
    options: MergeOptions,
    version: String,
    max_id: u32,
    objects: BTreeMap<ObjectId, Object>,
    pages: Vec<(ObjectId, Dictionary)>,
    navigation: Navigation,
    sources: Vec<SourceSummary>,
}

impl PdfMerger {
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            version: "1.4".to_string(),
            max_id: 0,
            objects: BTreeMap::new(),
            pages: Vec::new(),
            navigation: Navigation::new(),
            sources: Vec::new(),
        }
    }

    /// Load the PDF at `path` and append all of its pages
    pub fn append<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PdfError> {
        let source = SourceDocument::load(path)?;
        self.append_document(source)
    }

    /// Append every page of an already loaded document
    pub fn append_document(&mut self, mut source: SourceDocument) -> Result<usize, PdfError> {
        source.document.renumber_objects_with(self.max_id + 1);
        let page_ids = source.page_ids();
        let SourceDocument { path, document } = source;

        self.max_id = self.max_id.max(document.max_id);
        if document.version > self.version {
            self.version = document.version.clone();
        }

        let mut pages = Vec::with_capacity(page_ids.len());
        for page_id in page_ids {
            let page = flatten_page(&document, page_id).ok_or_else(|| PdfError::Structure {
                path: path.clone(),
                reason: format!("page object {} {} R is not a dictionary", page_id.0, page_id.1),
            })?;
            pages.push((page_id, page));
        }

        if self.options.import_outlines {
            self.navigation.collect(&document);
        }

        let appended = pages.len();
        self.objects.extend(
            document
                .objects
                .into_iter()
                .filter(|(_, object)| !is_structural(object)),
        );
        self.pages.extend(pages);

        debug!(path = %path.display(), pages = appended, max_id = self.max_id, "appended document");
        self.sources.push(SourceSummary { path, pages: appended });
        Ok(appended)
    }

    /// Pages appended so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Assemble the combined document: one flat page tree in append order,
    /// a fresh catalog carrying the collected outline and destinations, and
    /// optionally an info dictionary.
    pub fn build(self) -> Result<Document, PdfError> {
        let expected = self.pages.len();
        let mut document = Document::with_version(self.version);
        document.objects = self.objects;
        document.max_id = self.max_id;

        let pages_id = document.new_object_id();
        let kids: Vec<Object> = self.pages.iter().map(|(id, _)| Object::Reference(*id)).collect();
        for (page_id, mut page) in self.pages {
            page.set("Parent", pages_id);
            document.objects.insert(page_id, Object::Dictionary(page));
        }
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => expected as i64,
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        let outline_items = self.navigation.outline_len();
        self.navigation.install(&mut document, &mut catalog);
        if outline_items > 0 {
            debug!(items = outline_items, "linked source outlines");
        }
        let catalog_id = document.add_object(catalog);
        document.trailer.set("Root", catalog_id);

        if self.options.stamp_metadata {
            let info_id = document.add_object(info_dictionary(&self.options.producer, Utc::now()));
            document.trailer.set("Info", info_id);
        }

        // Source catalogs, outline roots and info dictionaries are no longer referenced
        let pruned = document.prune_objects();
        debug!(pruned = pruned.len(), "pruned unreachable objects");

        if self.options.compress {
            document.compress();
        }

        if self.options.verify_page_count {
            let actual = document.get_pages().len();
            if actual != expected {
                return Err(PdfError::PageCount { expected, actual });
            }
        }

        Ok(document)
    }

    /// Build the combined document and write it atomically to `output`
    pub fn write<P: AsRef<Path>>(self, output: P) -> Result<MergeSummary, PdfError> {
        let output = output.as_ref();
        let overwrite = self.options.overwrite;
        let sources = self.sources.clone();

        let mut document = self.build()?;
        let pages = document.get_pages().len();
        let bytes = write_document(&mut document, output, overwrite)?;

        Ok(MergeSummary { pages, bytes, sources })
    }
}

/// Merge the resume followed by the cover letter into the request's output path
pub fn merge_pdfs(request: &MergeRequest, options: &MergeOptions) -> Result<MergeSummary, PdfError> {
    let output = request.output_path();
    if !options.overwrite && output.exists() {
        return Err(PdfError::OutputExists(output.to_path_buf()));
    }

    let mut merger = PdfMerger::new(options.clone());
    merger.append(request.resume_path())?;
    merger.append(request.cover_letter_path())?;
    let summary = merger.write(output)?;

    info!(
        output = %output.display(),
        pages = summary.pages,
        bytes = summary.bytes,
        "merged {} documents",
        summary.sources.len()
    );
    Ok(summary)
}
