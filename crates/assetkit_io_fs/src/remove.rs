//! Recursive delete by extension.

use std::fs;
use std::path::Path;

use crate::path::{file_extension, to_forward_slashes};
use crate::spec::FsError;
use crate::util::collect_files;

/// Delete every file under `dir` whose extension equals `ext`.
///
/// `ext` may be given as `png` or `.png`. Matching is exact and
/// case-sensitive. Returns the number of deleted files; the first failure
/// aborts the walk.
pub fn delete_files_by_ext<P: AsRef<Path>>(dir: P, ext: &str) -> Result<u64, FsError> {
    let c_ext = if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    };

    let mut n_deleted = 0_u64;
    for path_file in collect_files(dir.as_ref())? {
        if file_extension(&to_forward_slashes(&path_file.to_string_lossy())) != c_ext {
            continue;
        }
        fs::remove_file(&path_file).map_err(|e| FsError::io(&path_file, e))?;
        log::debug!("Deleted file: {}", path_file.display());
        n_deleted += 1;
    }
    Ok(n_deleted)
}
