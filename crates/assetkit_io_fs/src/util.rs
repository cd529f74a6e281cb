use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::path::file_extension;
use crate::spec::{EnumReplacePatternMode, FsError};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeReplacePatternSeq {
    Extension(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

impl TypeReplacePatternSeq {
    /// Compile raw patterns. `None` means "include all".
    pub(crate) fn from_raw(
        patterns: Option<&[String]>,
        rule_pattern: EnumReplacePatternMode,
    ) -> Result<Option<Self>, FsError> {
        let Some(patterns) = patterns else {
            return Ok(None);
        };
        if patterns.is_empty() {
            return Ok(None);
        }

        match rule_pattern {
            EnumReplacePatternMode::Extension => Ok(Some(Self::Extension(patterns.to_vec()))),
            EnumReplacePatternMode::Glob => {
                let mut l_glob = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    let matcher = Glob::new(pattern)
                        .map_err(|e| {
                            FsError::InvalidPattern(format!("Invalid include pattern: {e}"))
                        })?
                        .compile_matcher();
                    l_glob.push(matcher);
                }
                Ok(Some(Self::Glob(l_glob)))
            }
            EnumReplacePatternMode::Regex => {
                let mut l_regex = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    let regex = Regex::new(pattern).map_err(|e| {
                        FsError::InvalidPattern(format!("Invalid include pattern: {e}"))
                    })?;
                    l_regex.push(regex);
                }
                Ok(Some(Self::Regex(l_regex)))
            }
        }
    }

    /// Extension mode compares the extension, the others the file name.
    pub(crate) fn is_match(&self, name_file: &str) -> bool {
        match self {
            Self::Extension(v) => {
                let ext = file_extension(name_file);
                v.iter().any(|p| p == ext)
            }
            Self::Glob(v) => v.iter().any(|p| p.is_match(name_file)),
            Self::Regex(v) => v.iter().any(|p| p.is_match(name_file)),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TreeWalk

/// Collect every regular file beneath `path_root`, at any depth.
///
/// Entries are sorted by name per directory; subdirectories are walked
/// before the files of the same level. Symlinked directories are not
/// descended. The whole listing is produced before the caller copies anything.
pub(crate) fn collect_files(path_root: &Path) -> Result<Vec<PathBuf>, FsError> {
    let mut l_files = Vec::new();
    walk_directory(path_root, &mut l_files)?;
    Ok(l_files)
}

fn walk_directory(path_root: &Path, l_files: &mut Vec<PathBuf>) -> Result<(), FsError> {
    let enumeration_err = |source: io::Error| FsError::Enumeration {
        path: path_root.to_path_buf(),
        source,
    };

    let mut l_dirs: Vec<PathBuf> = Vec::new();
    let mut l_files_here: Vec<PathBuf> = Vec::new();

    for _entry_res in fs::read_dir(path_root).map_err(enumeration_err)? {
        let entry = _entry_res.map_err(enumeration_err)?;
        let path_entry = entry.path();
        let cfg_file_type = entry.file_type().map_err(enumeration_err)?;

        if cfg_file_type.is_dir() {
            l_dirs.push(path_entry);
        } else if cfg_file_type.is_file() {
            l_files_here.push(path_entry);
        } else if cfg_file_type.is_symlink() {
            if path_entry.is_file() {
                l_files_here.push(path_entry);
            } else {
                log::warn!("Symlink skipped: {}", path_entry.display());
            }
        } else {
            log::warn!("Special file skipped: {}", path_entry.display());
        }
    }

    l_dirs.sort();
    l_files_here.sort();

    for path_dir in l_dirs {
        walk_directory(&path_dir, l_files)?;
    }
    l_files.extend(l_files_here);
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

/// Create every missing ancestor directory of `path_file`.
pub(crate) fn ensure_parent_dir(path_file: &Path) -> Result<(), FsError> {
    match path_file.parent() {
        Some(path_parent) if !path_parent.as_os_str().is_empty() => {
            fs::create_dir_all(path_parent).map_err(|e| FsError::io(path_parent, e))
        }
        _ => Ok(()),
    }
}

/// Map a walked file under `path_dir_src` to the same relative spot under
/// `path_dir_dst`. The prefix is stripped by path components.
pub(crate) fn derive_destination_path(
    path_file_src: &Path,
    path_dir_src: &Path,
    path_dir_dst: &Path,
) -> Result<PathBuf, FsError> {
    let path_rel = path_file_src
        .strip_prefix(path_dir_src)
        .map_err(|_| FsError::PathOutsideRoot {
            path: path_file_src.to_path_buf(),
            root: path_dir_src.to_path_buf(),
        })?;
    Ok(path_dir_dst.join(path_rel))
}

#[cfg(unix)]
fn is_same_file(path_file_src: &Path, path_file_dst: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(path_file_src), fs::metadata(path_file_dst)) {
        (Ok(stat_src), Ok(stat_dst)) => {
            (stat_src.dev(), stat_src.ino()) == (stat_dst.dev(), stat_dst.ino())
        }
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(path_file_src: &Path, path_file_dst: &Path) -> bool {
    match (
        fs::canonicalize(path_file_src),
        fs::canonicalize(path_file_dst),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy bytes and carry the source modification time over.
pub(crate) fn copy_file_with_mtime(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), FsError> {
    use filetime::{FileTime, set_file_mtime};

    if is_same_file(path_file_src, path_file_dst) {
        return Err(FsError::io(
            path_file_dst,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and destination are the same file",
            ),
        ));
    }

    fs::copy(path_file_src, path_file_dst).map_err(|e| FsError::io(path_file_dst, e))?;
    let stat_src = fs::metadata(path_file_src).map_err(|e| FsError::io(path_file_src, e))?;
    set_file_mtime(
        path_file_dst,
        FileTime::from_last_modification_time(&stat_src),
    )
    .map_err(|e| FsError::io(path_file_dst, e))?;

    log::debug!(
        "Copied file: {} => {}",
        path_file_src.display(),
        path_file_dst.display()
    );
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
