// error.rs - Error types for the invocation and the merge operation

use std::path::PathBuf;
use thiserror::Error;

use crate::status::ExitStatus;

/// Failures raised while loading, combining or writing PDF documents
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("{}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("{}: file has not been decrypted", .path.display())]
    Encrypted { path: PathBuf },

    #[error("{}: {reason}", .path.display())]
    Structure { path: PathBuf, reason: String },

    #[error("output file '{}' already exists", .0.display())]
    OutputExists(PathBuf),

    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("merged document has {actual} pages, expected {expected}")]
    PageCount { expected: usize, actual: usize },
}

/// Every way an invocation can fail. The display text is the status line message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid JSON input: {0}")]
    Input(String),

    #[error("Missing file paths!")]
    Validation { missing: Vec<&'static str> },

    #[error("PDF merge failed: {0}")]
    Merge(#[from] PdfError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Input(err.to_string())
    }
}

impl AppError {
    /// Failure classes are not distinguished at the exit-code level
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::Failure
    }

    /// Short tag used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Input(_) => "input",
            AppError::Validation { .. } => "validation",
            AppError::Merge(_) => "merge",
            AppError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
