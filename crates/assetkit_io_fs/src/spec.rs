//! Copy option models and error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// How `patterns_include` entries are interpreted by a replace run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumReplacePatternMode {
    /// Exact, case-sensitive match against the file extension (`.png`).
    Extension,
    /// Shell-like wildcards matched against the file name.
    Glob,
    /// Regular expression matched against the file name.
    Regex,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for [`crate::replace::replace_dir_with_options`].
#[derive(Debug, Clone)]
pub struct SpecReplaceOptions {
    /// Files must match at least one entry. `None` or empty includes all.
    pub patterns_include: Option<Vec<String>>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumReplacePatternMode,
}

impl Default for SpecReplaceOptions {
    fn default() -> Self {
        Self {
            patterns_include: None,
            rule_pattern: EnumReplacePatternMode::Extension,
        }
    }
}

/// Errors raised by copy, replace and delete operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Source file is absent (or not a regular file) at copy time.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Destination exists and overwrite was not allowed.
    #[error("Destination exists: {}", .0.display())]
    DestinationExists(PathBuf),
    /// Directory could not be listed during a tree walk.
    #[error("Failed to read directory {} ({source})", path.display())]
    Enumeration {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Directory creation, copy or delete failed.
    #[error("IO failure on {} ({source})", path.display())]
    Io {
        /// Path the failing operation targeted.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Include pattern failed to compile.
    #[error("{0}")]
    InvalidPattern(String),
    /// Walked file is not beneath the walk root.
    #[error("Path {} is not under root {}", path.display(), root.display())]
    PathOutsideRoot {
        /// Offending file path.
        path: PathBuf,
        /// Walk root.
        root: PathBuf,
    },
}

impl FsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
