use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::image_pipeline::common::error::{CaptureError, Result};

/// Writes `path` through a temporary file in the same directory, renamed into
/// place once `write` succeeds. On any failure the temporary file is removed and
/// `path` is left untouched.
///
/// The destination directory must already exist.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let directory = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(directory).map_err(|e| {
        CaptureError::OutputWriteError(format!("{}: {}", path.display(), e))
    })?;
    debug!(tmp = %tmp.path().display(), "Staging frame");

    write(&mut tmp)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| {
        CaptureError::OutputWriteError(format!("{}: {}", path.display(), e.error))
    })?;
    Ok(())
}
