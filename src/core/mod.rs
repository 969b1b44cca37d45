// mod.rs - Core logic module

pub mod merger;
pub mod metadata;
pub mod outline;
pub mod pages;
pub mod request;

// Re-export main types for convenience
pub use merger::{merge_pdfs, MergeOptions, MergeSummary, PdfMerger, SourceSummary};
pub use request::MergeRequest;
