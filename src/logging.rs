// logging.rs - Opt-in file logging
//
// stdout carries the status line and stderr is never written, so records only
// go to a file named in the configuration.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::AppError;

/// Install a global subscriber appending to `log_file`.
///
/// Only the first call in a process installs anything; later calls still
/// check that the file can be opened.
pub fn init(log_file: &Path, level: Level) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            AppError::Config(format!("failed to open log file '{}': {}", log_file.display(), e))
        })?;

    let installed = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(path = %log_file.display(), %level, "file logging enabled");
    }
    Ok(())
}
