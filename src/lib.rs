// lib.rs - resume-merge library root

//! # resume-merge - combine a resume and a cover letter into one PDF
//!
//! The binary is driven by a desktop host: it receives one JSON argument,
//! writes the merged document and answers with a single JSON status line on
//! stdout (exit status 0 on success, 2 on any failure).
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use resume_merge::prelude::*;
//!
//! let fields = parse_payload(Some(
//!     r#"{"resume": "resume.pdf", "cover_letter": "cover.pdf", "output": "application.pdf"}"#,
//! ))?;
//! let request = MergeRequest::from_fields(&fields)?;
//! let summary = merge_pdfs(&request, &MergeOptions::default())?;
//! println!("{} pages", summary.pages);
//! println!("{}", StatusReport::success(&request).to_line());
//! # Ok::<(), resume_merge::AppError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod logging;
pub mod output;
pub mod status;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{parse_payload, run, Outcome, Settings};
    pub use crate::core::{merge_pdfs, MergeOptions, MergeRequest, MergeSummary, PdfMerger};
    pub use crate::error::{AppError, PdfError};
    pub use crate::output::{Status, StatusReport};
    pub use crate::status::ExitStatus;
}

// Re-export main types at the root level for convenience
pub use crate::core::{MergeOptions, MergeRequest, PdfMerger};
pub use error::{AppError, PdfError};
pub use status::ExitStatus;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
