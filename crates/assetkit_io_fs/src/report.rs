//! Replace report model and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::spec::FsError;

/// Outcome of one `replace_dir` run.
///
/// The run stops at the first error, which is kept in [`ReportReplace::error`].
/// Files copied before that point remain on disk.
#[derive(Debug, Default)]
pub struct ReportReplace {
    /// Files found by the walk.
    pub cnt_scanned: u64,
    /// Files that passed the sidecar and include filters.
    pub cnt_matched: u64,
    /// Files written to the destination.
    pub cnt_copied: u64,
    /// Files left out by the sidecar or include filters.
    pub cnt_skipped: u64,
    /// First failure; `None` when the run completed.
    pub error: Option<FsError>,
}

impl ReportReplace {
    /// `true` when the run finished without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// `true` when the run was aborted by an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// First failure, if any.
    pub fn error(&self) -> Option<&FsError> {
        self.error.as_ref()
    }

    /// Drop the counters and keep only the outcome.
    pub fn into_result(self) -> Result<(), FsError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped);
        dict_counts.insert("cnt_errors".to_string(), u64::from(self.is_err()));
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let c_status = if self.is_ok() { "ok" } else { "failed" };
        format!(
            "{prefix} scanned={} matched={} copied={} skipped={} status={c_status}",
            self.cnt_scanned, self.cnt_matched, self.cnt_copied, self.cnt_skipped,
        )
    }
}

impl fmt::Display for ReportReplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[REPLACE]"))
    }
}

/// Mutable accumulator for replace statistics.
#[derive(Debug, Default)]
pub struct ReportReplaceBuilder {
    /// See [`ReportReplace::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportReplace::cnt_matched`].
    pub cnt_matched: u64,
    /// See [`ReportReplace::cnt_copied`].
    pub cnt_copied: u64,
    /// See [`ReportReplace::cnt_skipped`].
    pub cnt_skipped: u64,
}

impl ReportReplaceBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment matched count by one.
    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    /// Increment copied count by one.
    pub fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    /// Increment skipped count by one.
    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    /// Finalize builder into a report carrying `error` as the outcome.
    pub fn build(self, error: Option<FsError>) -> ReportReplace {
        ReportReplace {
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_copied: self.cnt_copied,
            cnt_skipped: self.cnt_skipped,
            error,
        }
    }
}
