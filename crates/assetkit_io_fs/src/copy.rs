//! Single file copy and recursive tree copy.
//!
//! Both entry points fail fast: the first error aborts the call and is
//! returned as-is. Files copied before the failure stay on disk.

use std::fs;
use std::path::Path;

use crate::path::to_forward_slashes;
use crate::spec::FsError;
use crate::util::{collect_files, copy_file_with_mtime, derive_destination_path, ensure_parent_dir};

/// Copy one file to `target`, creating missing parent directories first.
///
/// - Missing source (or a source that is not a regular file):
///   [`FsError::SourceNotFound`].
/// - Existing `target` with `if_overwrite == false`:
///   [`FsError::DestinationExists`]; the destination is left untouched.
///
/// Parent directories created before a failure are not removed.
pub fn copy_file<P, Q>(source: P, target: Q, if_overwrite: bool) -> Result<(), FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_file_src = source.as_ref();
    let path_file_dst = target.as_ref();

    if !path_file_src.is_file() {
        return Err(FsError::SourceNotFound(path_file_src.to_path_buf()));
    }
    ensure_parent_dir(path_file_dst)?;
    if !if_overwrite && fs::symlink_metadata(path_file_dst).is_ok() {
        return Err(FsError::DestinationExists(path_file_dst.to_path_buf()));
    }

    copy_file_with_mtime(path_file_src, path_file_dst)
}

/// Copy a file or a whole directory tree to `target`.
///
/// A regular-file `source` is handed to [`copy_file`] with `if_overwrite`.
/// Otherwise `source` is walked as a directory root and every file is copied
/// to the same relative location under `target`. Files inside a tree are
/// always overwritten; `if_overwrite` only governs the single-file case.
///
/// Both root paths are normalized to forward slashes before use; walked
/// entries keep their on-disk names.
pub fn copy<P, Q>(source: P, target: Q, if_overwrite: bool) -> Result<(), FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let c_src = to_forward_slashes(&source.as_ref().to_string_lossy());
    let c_dst = to_forward_slashes(&target.as_ref().to_string_lossy());
    let path_src = Path::new(&c_src);

    if path_src.is_file() {
        return copy_file(path_src, &c_dst, if_overwrite);
    }

    let path_dst = Path::new(&c_dst);
    let l_files = collect_files(path_src)?;
    log::debug!("Copying {} file(s): {c_src} => {c_dst}", l_files.len());
    for path_file_src in l_files {
        let path_file_dst = derive_destination_path(&path_file_src, path_src, path_dst)?;
        copy_file(&path_file_src, &path_file_dst, true)?;
    }
    Ok(())
}
