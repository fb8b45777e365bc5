//! Filesystem primitives used by the converter
//!
//! Writing a note must not change its timestamps, and moves must create any
//! missing destination directories.

use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;

/// Rename `from` to `to`, creating any missing ancestors of `to` first.
///
/// This is a rename, not a copy: metadata is preserved and the operation is
/// atomic when both paths are on the same filesystem.
///
/// # Errors
/// Returns `io::ErrorKind::NotFound` if `from` does not exist, or any error
/// from creating the destination directories or from the rename itself.
pub fn rename_with_parents(from: &Path, to: &Path) -> io::Result<()> {
    fs::symlink_metadata(from)?;

    if let Some(parent) = to.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::rename(from, to)
}

/// Rewrite a UTF-8 text file through `edit`, then restore the access and
/// modification times it had before the write. Returns the new contents.
///
/// # Errors
/// Returns an error if the file cannot be read as UTF-8, written, or if its
/// timestamps cannot be restored.
pub fn rewrite_preserving_times<F>(path: &Path, edit: F) -> io::Result<String>
where
    F: FnOnce(&str) -> String,
{
    let metadata = fs::metadata(path)?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);

    let contents = edit(&fs::read_to_string(path)?);
    fs::write(path, &contents)?;

    filetime::set_file_times(path, accessed, modified)?;
    Ok(contents)
}
