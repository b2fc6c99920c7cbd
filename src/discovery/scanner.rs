//! Directory scanning functionality
//!
//! This module contains functions for listing directories and filtering the
//! listing by file extension.

use std::ffi::OsStr;
use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{Result, file_operation_error, not_found_error};

/// The regular files found directly inside a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    /// The directory that was listed
    pub path: PathBuf,
    /// File names relative to `path`, in sorted order
    pub files: Vec<String>,
}

/// Lists the regular files of a directory
///
/// Subdirectories are skipped, and so are files whose names are not valid
/// UTF-8. Names are sorted so batches run in a stable order.
///
/// # Errors
/// Returns a not-found error if `directory` is not a directory, or a file
/// operation error if it cannot be read
pub fn list_directory(directory: &Path) -> Result<FileListing> {
    debug!("Scanning directory: {}", directory.display());

    if !directory.is_dir() {
        return Err(not_found_error(directory.to_path_buf()));
    }

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?;

    let mut files: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| match path.file_name()?.to_str() {
            Some(name) => Some(name.to_string()),
            None => {
                warn!("Skipping file with a non UTF-8 name: {}", path.display());
                None
            }
        })
        .collect();
    files.sort();

    debug!("Found {} files in directory", files.len());

    Ok(FileListing {
        path: directory.to_path_buf(),
        files,
    })
}

/// Keeps the files of a listing whose extension is `extension`
///
/// The comparison is case-sensitive. The extension may be given with or
/// without its leading period. Filtering is idempotent.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use bookworm::discovery::{with_extension, FileListing};
///
/// let listing = FileListing {
///     path: PathBuf::from("/foo/bar/baz/"),
///     files: vec!["quux1.tiff".into(), "quux2.tiff".into(), "quux4.jpg".into()],
/// };
///
/// assert_eq!(with_extension(".tiff", &listing).files, ["quux1.tiff", "quux2.tiff"]);
/// assert_eq!(with_extension("tiff", &listing), with_extension(".tiff", &listing));
/// ```
pub fn with_extension(extension: &str, listing: &FileListing) -> FileListing {
    let wanted = extension.strip_prefix('.').unwrap_or(extension);

    let files = listing
        .files
        .iter()
        .filter(|file| Path::new(file.as_str()).extension() == Some(OsStr::new(wanted)))
        .cloned()
        .collect();

    FileListing {
        path: listing.path.clone(),
        files,
    }
}
