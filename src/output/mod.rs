// mod.rs - Output writers

pub mod report;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use lopdf::Document;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::PdfError;

pub use report::{Status, StatusReport};

/// Directory the output lands in; a bare file name means the working directory
fn parent_dir(file_path: &Path) -> &Path {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> PdfError + '_ {
    move |source| PdfError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Temporary file in `dir` created with the mode a plain create would get
/// (0666 less the umask) instead of tempfile's private 0600.
#[cfg(unix)]
fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    tempfile::Builder::new()
        .prefix(".resume-merge")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn stage_in(dir: &Path) -> io::Result<NamedTempFile> {
    tempfile::Builder::new().prefix(".resume-merge").tempfile_in(dir)
}

/// Carry the permissions of a file about to be replaced over to `staged`
fn keep_existing_mode(staged: &File, file_path: &Path) -> io::Result<()> {
    match fs::metadata(file_path) {
        Ok(existing) if existing.is_file() => staged.set_permissions(existing.permissions()),
        _ => Ok(()),
    }
}

/// Serialize `document` to `file_path` without ever exposing a partial file.
///
/// The document is staged in a temporary file next to the destination and
/// renamed into place once fully written and synced. A replaced file keeps
/// its permissions; a new one gets the umask default. The parent directory is
/// not created. Returns the number of bytes written.
pub fn write_document(
    document: &mut Document,
    file_path: &Path,
    overwrite: bool,
) -> Result<u64, PdfError> {
    let mut staged = stage_in(parent_dir(file_path)).map_err(write_error(file_path))?;
    debug!(staged = %staged.path().display(), "staging merged document");

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        document.save_to(&mut writer).map_err(write_error(file_path))?;
        writer.flush().map_err(write_error(file_path))?;
    }

    let file = staged.as_file();
    file.sync_all().map_err(write_error(file_path))?;
    keep_existing_mode(file, file_path).map_err(write_error(file_path))?;
    let bytes = file.metadata().map_err(write_error(file_path))?.len();

    let persisted = if overwrite {
        staged.persist(file_path)
    } else {
        staged.persist_noclobber(file_path)
    };
    persisted.map_err(|err| {
        if !overwrite && err.error.kind() == std::io::ErrorKind::AlreadyExists {
            PdfError::OutputExists(file_path.to_path_buf())
        } else {
            PdfError::Write {
                path: file_path.to_path_buf(),
                source: err.error,
            }
        }
    })?;

    debug!(path = %file_path.display(), bytes, "merged document written");
    Ok(bytes)
}
