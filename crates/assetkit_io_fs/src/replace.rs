//! Filtered tree replace.
//!
//! Copies every file of a source tree over a destination tree, replacing
//! existing files. `.meta` sidecars are never copied. Unlike [`crate::copy`],
//! errors do not propagate: the first one stops the run and is stored in the
//! returned [`ReportReplace`].

use std::path::Path;

use crate::conf::C_EXT_SIDECAR_META;
use crate::path::{file_extension, to_forward_slashes};
use crate::report::{ReportReplace, ReportReplaceBuilder};
use crate::spec::{EnumReplacePatternMode, FsError, SpecReplaceOptions};
use crate::util::{
    TypeReplacePatternSeq, collect_files, copy_file_with_mtime, derive_destination_path,
    ensure_parent_dir,
};

/// Replace files under `dir_target` with the files of `dir_source`.
///
/// `exts` is an extension allow-list (`".png"`), matched exactly and
/// case-sensitively. `None` or an empty list copies every non-sidecar file.
///
/// Check [`ReportReplace::is_ok`] for the outcome; a failed run keeps the
/// files it copied before the error.
pub fn replace_dir<P, Q>(dir_source: P, dir_target: Q, exts: Option<&[String]>) -> ReportReplace
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let spec_options = SpecReplaceOptions {
        patterns_include: exts.map(<[String]>::to_vec),
        rule_pattern: EnumReplacePatternMode::Extension,
    };
    replace_dir_with_options(dir_source, dir_target, spec_options)
}

/// [`replace_dir`] with a selectable include pattern mode.
///
/// Invalid glob or regex patterns fail the run before any file is touched.
pub fn replace_dir_with_options<P, Q>(
    dir_source: P,
    dir_target: Q,
    spec_options: SpecReplaceOptions,
) -> ReportReplace
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut builder_report = ReportReplaceBuilder::default();
    let res_replace = run_replace(
        dir_source.as_ref(),
        dir_target.as_ref(),
        &spec_options,
        &mut builder_report,
    );
    if let Err(e) = &res_replace {
        log::error!("Replace aborted: {e}");
    }
    let report = builder_report.build(res_replace.err());
    log::debug!("{report}");
    report
}

fn run_replace(
    path_dir_src: &Path,
    path_dir_dst: &Path,
    spec_options: &SpecReplaceOptions,
    builder_report: &mut ReportReplaceBuilder,
) -> Result<(), FsError> {
    let spec_pats = TypeReplacePatternSeq::from_raw(
        spec_options.patterns_include.as_deref(),
        spec_options.rule_pattern,
    )?;
    let c_dir_src = to_forward_slashes(&path_dir_src.to_string_lossy());
    let c_dir_dst = to_forward_slashes(&path_dir_dst.to_string_lossy());
    let path_dir_src = Path::new(&c_dir_src);
    let path_dir_dst = Path::new(&c_dir_dst);

    for path_file_src in collect_files(path_dir_src)? {
        builder_report.add_scanned();

        let c_name = path_file_src
            .file_name()
            .map(|v| v.to_string_lossy())
            .unwrap_or_default();
        if file_extension(&c_name) == C_EXT_SIDECAR_META {
            builder_report.add_skipped();
            continue;
        }
        if let Some(spec_pats) = &spec_pats {
            if !spec_pats.is_match(&c_name) {
                builder_report.add_skipped();
                continue;
            }
        }
        builder_report.add_matched();

        let path_file_dst = derive_destination_path(&path_file_src, path_dir_src, path_dir_dst)?;
        ensure_parent_dir(&path_file_dst)?;
        copy_file_with_mtime(&path_file_src, &path_file_dst)?;
        builder_report.add_copied();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::{replace_dir, replace_dir_with_options};
    use crate::spec::{EnumReplacePatternMode, FsError, SpecReplaceOptions};

    fn write_text(path: &Path, txt: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, txt).expect("write text");
    }

    fn exts(l_exts: &[&str]) -> Vec<String> {
        l_exts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replace_dir_filters_extension_and_meta() {
        let _ = env_logger::builder().is_test(true).try_init();
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("x.txt"), "x");
        write_text(&src.join("y.png"), "y");
        write_text(&src.join("z.png.meta"), "z");

        let l_exts = exts(&[".png"]);
        let report = replace_dir(&src, &dst, Some(l_exts.as_slice()));
        assert!(report.is_ok(), "{report}");
        assert!(dst.join("y.png").exists());
        assert!(!dst.join("x.txt").exists());
        assert!(!dst.join("z.png.meta").exists());
        assert_eq!(report.cnt_scanned, 3);
        assert_eq!(report.cnt_matched, 1);
        assert_eq!(report.cnt_copied, 1);
        assert_eq!(report.cnt_skipped, 2);
    }

    #[test]
    fn replace_dir_without_filter_still_skips_meta() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("ui/icon.png"), "icon");
        write_text(&src.join("ui/icon.png.meta"), "guid");
        write_text(&src.join(".meta"), "bare");
        write_text(&src.join("cfg/app.json"), "{}");

        let report = replace_dir(&src, &dst, None);
        assert!(report.is_ok(), "{report}");
        assert!(dst.join("ui/icon.png").exists());
        assert!(dst.join("cfg/app.json").exists());
        assert!(!dst.join("ui/icon.png.meta").exists());
        assert!(!dst.join(".meta").exists());
        assert_eq!(report.cnt_copied, 2);
    }

    #[test]
    fn replace_dir_empty_filter_includes_all() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.txt"), "a");
        write_text(&src.join("b.bin"), "b");

        let report = replace_dir(&src, &dst, Some(&[][..]));
        assert!(report.is_ok(), "{report}");
        assert_eq!(report.cnt_copied, 2);
    }

    #[test]
    fn replace_dir_extension_match_is_case_sensitive() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("lower.png"), "l");
        write_text(&src.join("upper.PNG"), "u");

        let l_exts = exts(&[".png"]);
        let report = replace_dir(&src, &dst, Some(l_exts.as_slice()));
        assert!(report.is_ok(), "{report}");
        assert!(dst.join("lower.png").exists());
        assert!(!dst.join("upper.PNG").exists());
    }

    #[test]
    fn replace_dir_overwrites_existing_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("deep/a.txt"), "fresh");
        write_text(&dst.join("deep/a.txt"), "stale");
        write_text(&dst.join("deep/untouched.txt"), "keep");

        let report = replace_dir(&src, &dst, None);
        assert!(report.is_ok(), "{report}");
        assert_eq!(
            fs::read_to_string(dst.join("deep/a.txt")).expect("read"),
            "fresh"
        );
        assert_eq!(
            fs::read_to_string(dst.join("deep/untouched.txt")).expect("read"),
            "keep"
        );
    }

    #[test]
    fn replace_dir_missing_source_reports_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let report = replace_dir(tmp.path().join("missing"), tmp.path().join("dst"), None);
        assert!(report.is_err());
        assert!(matches!(report.error(), Some(FsError::Enumeration { .. })));
        assert_eq!(report.cnt_scanned, 0);
    }

    #[test]
    fn replace_dir_stops_at_first_error_and_keeps_copied_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.txt"), "a");
        write_text(&src.join("b.txt"), "b");
        write_text(&src.join("c.txt"), "c");
        // A directory squatting on the destination file path makes the copy fail.
        fs::create_dir_all(dst.join("b.txt")).expect("mkdir squatter");

        let report = replace_dir(&src, &dst, None);
        assert!(report.is_err());
        assert!(matches!(report.error(), Some(FsError::Io { .. })));
        assert_eq!(report.cnt_copied, 1);
        assert!(dst.join("a.txt").is_file());
        assert!(!dst.join("c.txt").exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn replace_dir_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        let name = OsStr::from_bytes(b"caf\xe9.png");
        fs::create_dir_all(&src).expect("mkdir");
        fs::write(src.join(name), "cafe").expect("write");

        let l_exts = exts(&[".png"]);
        let report = replace_dir(&src, &dst, Some(l_exts.as_slice()));
        assert!(report.is_ok(), "{report}");
        assert_eq!(report.cnt_copied, 1);
        assert_eq!(fs::read_to_string(dst.join(name)).expect("read"), "cafe");
    }

    #[test]
    fn replace_dir_glob_mode_matches_file_name() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("atlas/icon_01.png"), "1");
        write_text(&src.join("atlas/bg.jpg"), "bg");
        write_text(&src.join("atlas/icon_01.png.meta"), "m");

        let spec_options = SpecReplaceOptions {
            patterns_include: Some(vec!["icon_*".to_string()]),
            rule_pattern: EnumReplacePatternMode::Glob,
        };
        let report = replace_dir_with_options(&src, &dst, spec_options);
        assert!(report.is_ok(), "{report}");
        assert!(dst.join("atlas/icon_01.png").exists());
        assert!(!dst.join("atlas/bg.jpg").exists());
        assert!(!dst.join("atlas/icon_01.png.meta").exists());
    }

    #[test]
    fn replace_dir_regex_mode_matches_file_name() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("lua/main.lua"), "m");
        write_text(&src.join("lua/main.lua.bytes"), "b");

        let spec_options = SpecReplaceOptions {
            patterns_include: Some(vec![r"\.lua$".to_string()]),
            rule_pattern: EnumReplacePatternMode::Regex,
        };
        let report = replace_dir_with_options(&src, &dst, spec_options);
        assert!(report.is_ok(), "{report}");
        assert!(dst.join("lua/main.lua").exists());
        assert!(!dst.join("lua/main.lua.bytes").exists());
    }

    #[test]
    fn replace_dir_invalid_glob_touches_nothing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write_text(&src.join("a.txt"), "a");

        let spec_options = SpecReplaceOptions {
            patterns_include: Some(vec!["[".to_string()]),
            rule_pattern: EnumReplacePatternMode::Glob,
        };
        let report = replace_dir_with_options(&src, &dst, spec_options);
        assert!(matches!(report.error(), Some(FsError::InvalidPattern(_))));
        assert_eq!(report.cnt_scanned, 0);
        assert!(!dst.exists());
    }
}
