//! Directory bookkeeping shared by the runners
//!
//! Setup creates whole chains of missing directories at once, so it records
//! the topmost one it made. Cleanup walks back up from the deepest directory
//! to that point and stops at the first one that is not empty.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{Result, file_operation_error};

/// Creates `dir` with all its missing parents
///
/// Returns the topmost directory that did not exist before, or `None` when
/// `dir` was already there.
pub(super) fn create_missing_dirs(dir: &Path) -> Result<Option<PathBuf>> {
    let top = dir
        .ancestors()
        .take_while(|ancestor| !ancestor.as_os_str().is_empty() && !ancestor.exists())
        .last()
        .map(Path::to_path_buf);

    if top.is_some() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir)
            .map_err(|e| file_operation_error(e, dir.to_path_buf(), "create directory"))?;
    }

    Ok(top)
}

/// Removes `dir` and its parents up to and including `top` while they are empty
///
/// Directories that are already gone are skipped.
pub(super) fn remove_empty_dirs(dir: &Path, top: &Path) -> Result<()> {
    for current in dir.ancestors().take_while(|ancestor| ancestor.starts_with(top)) {
        if current.is_dir() && !remove_dir_if_empty(current)? {
            break;
        }
    }

    Ok(())
}

/// Removes `dir` unless something else lives in it; returns whether it was removed
fn remove_dir_if_empty(dir: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(dir).map_err(|e| file_operation_error(e, dir.to_path_buf(), "read"))?;

    if entries.next().is_some() {
        warn!("Keeping non-empty directory: {}", dir.display());
        return Ok(false);
    }

    debug!("Removing directory: {}", dir.display());
    fs::remove_dir(dir).map_err(|e| file_operation_error(e, dir.to_path_buf(), "remove"))?;
    Ok(true)
}
