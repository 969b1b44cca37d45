// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::MergeOptions;
use crate::error::AppError;

/// Contents of a TOML configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Output
    pub overwrite: Option<bool>,
    pub compress: Option<bool>,
    pub verify_page_count: Option<bool>,
    pub import_outlines: Option<bool>,

    // Metadata
    pub stamp_metadata: Option<bool>,
    pub producer: Option<String>,

    // Logging
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub merge: MergeOptions,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            merge: MergeOptions::default(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read config file '{}': {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse config file '{}': {}", path.display(), e))
        })
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# resume-merge.toml - Configuration file for resume-merge
# Pass with: resume-merge --config resume-merge.toml '{"resume": ..., "cover_letter": ..., "output": ...}'

# =============================================================================
# OUTPUT
# =============================================================================

# Replace the output file when it already exists
overwrite = true

# Flate-compress streams in the merged document
compress = true

# Fail when the merged page count differs from the sum of the inputs
verify_page_count = true

# Carry the bookmarks and named destinations of both inputs
import_outlines = true

# =============================================================================
# METADATA
# =============================================================================

# Write Producer, CreationDate and ModDate into the document information
stamp_metadata = true

# Producer string (defaults to "resume-merge v<version>")
# producer = "resume-merge"

# =============================================================================
# LOGGING
# =============================================================================

# Append log records to this file (logging is off when omitted)
# log_file = "/tmp/resume-merge.log"

# Log level: trace, debug, info, warn, error
log_level = "info"
"#
        .to_string()
    }
}
