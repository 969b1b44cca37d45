// mod.rs - Source document loading

pub mod document;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export main types for convenience
pub use document::SourceDocument;
