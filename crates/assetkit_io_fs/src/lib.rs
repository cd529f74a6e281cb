//! `assetkit_io_fs` v1:
//! Path normalization and tree copy helpers for the asset build pipeline.
//!
//! Modules:
//! - `path`    : separator conversion, trimming, joining, relative paths
//! - `copy`    : single file copy and recursive tree copy (fail fast)
//! - `replace` : filtered tree replace with an explicit report
//! - `remove`  : recursive delete by extension
//! - `spec`    : errors and options
//! - `report`  : replace report model
//! - `conf`    : shared constants

pub mod conf;
pub mod copy;
pub mod path;
pub mod remove;
pub mod replace;
pub mod report;
pub mod spec;
mod util;

pub use copy::{copy, copy_file};
pub use path::{
    combine_dirs, combine_paths, file_extension, relative_path, to_back_slashes,
    to_forward_slashes, trim_leading_separator, trim_trailing_separator,
};
pub use remove::delete_files_by_ext;
pub use replace::{replace_dir, replace_dir_with_options};
pub use report::{ReportReplace, ReportReplaceBuilder};
pub use spec::{EnumReplacePatternMode, FsError, SpecReplaceOptions};
