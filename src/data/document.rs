// document.rs - Loading source PDF documents

use std::path::{Path, PathBuf};

use lopdf::{Document, ObjectId};
use tracing::debug;

use crate::error::PdfError;

/// A PDF loaded from disk, ready to be appended to a merge
#[derive(Debug)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub document: Document,
}

impl SourceDocument {
    /// Load a document and reject the ones whose pages cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PdfError> {
        let path = path.as_ref().to_path_buf();
        let document = Document::load(&path).map_err(|source| PdfError::Load {
            path: path.clone(),
            source,
        })?;
        Self::from_document(path, document)
    }

    /// Accept an already parsed document unless it is still encrypted or has
    /// no catalog.
    pub fn from_document(path: PathBuf, document: Document) -> Result<Self, PdfError> {
        if document.trailer.get(b"Encrypt").is_ok() {
            return Err(PdfError::Encrypted { path });
        }
        if document.catalog().is_err() {
            return Err(PdfError::Structure {
                path,
                reason: "document catalog not found".to_string(),
            });
        }

        let source = Self { path, document };
        debug!(
            path = %source.path.display(),
            version = %source.document.version,
            pages = source.page_count(),
            objects = source.document.objects.len(),
            "loaded source document"
        );
        Ok(source)
    }

    /// Page object ids in page-number order
    pub fn page_ids(&self) -> Vec<ObjectId> {
        self.document.get_pages().into_values().collect()
    }

    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}
