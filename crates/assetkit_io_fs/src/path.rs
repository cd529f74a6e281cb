//! Path string helpers: separator conversion, trimming, joining.
//!
//! All helpers are pure string transforms. They never touch the filesystem
//! and never validate that a path exists.

use crate::conf::{C_SEP_BACK, C_SEP_FORWARD, TUP_SEPARATORS};

////////////////////////////////////////////////////////////////////////////////
// #region Separators

fn is_separator(c: char) -> bool {
    TUP_SEPARATORS.contains(&c)
}

/// Replace every `\` with `/`.
pub fn to_forward_slashes(path: &str) -> String {
    path.replace(C_SEP_BACK, "/")
}

/// Replace every `/` with `\`.
pub fn to_back_slashes(path: &str) -> String {
    path.replace(C_SEP_FORWARD, "\\")
}

/// Remove exactly one leading separator (`/` or `\`) when present.
pub fn trim_leading_separator(path: &str) -> String {
    path.strip_prefix(is_separator).unwrap_or(path).to_string()
}

/// Remove exactly one trailing separator (`/` or `\`) when present.
pub fn trim_trailing_separator(path: &str) -> String {
    path.strip_suffix(is_separator).unwrap_or(path).to_string()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Combine

/// Join path segments into one forward-slash path.
///
/// Empty segments are ignored. At every joint, separators on both sides
/// collapse into a single `/`, so `["a/", "/b"]` yields `a/b`. A segment is
/// never treated as rooted: joining `"/b"` onto `"a"` appends, it does not
/// replace.
///
/// # Examples
/// ```
/// use assetkit_io_fs::combine_paths;
///
/// assert_eq!(combine_paths::<&str>(&[]), "");
/// assert_eq!(combine_paths(&["a"]), "a");
/// assert_eq!(combine_paths(&["a", "b"]), "a/b");
/// assert_eq!(combine_paths(&["C:\\assets\\", "ui", "icon.png"]), "C:/assets/ui/icon.png");
/// ```
pub fn combine_paths<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if path.is_empty() {
            path.push_str(segment);
            continue;
        }

        let len_head = path.trim_end_matches(is_separator).len();
        path.truncate(len_head);
        path.push(C_SEP_FORWARD);
        path.push_str(segment.trim_start_matches(is_separator));
    }
    to_forward_slashes(&path)
}

/// [`combine_paths`] followed by the trailing-separator policy.
///
/// Trailing separators collapse first, then:
/// - `if_end_with_separator = true`: the path ends with exactly one `/`.
/// - `if_end_with_separator = false`: the path ends without `/`.
pub fn combine_dirs<S: AsRef<str>>(segments: &[S], if_end_with_separator: bool) -> String {
    let mut path = combine_paths(segments);
    let len_head = path.trim_end_matches(C_SEP_FORWARD).len();
    path.truncate(len_head);
    if if_end_with_separator {
        path.push(C_SEP_FORWARD);
    }
    path
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Segments

/// Extension of the last path segment, including the leading dot.
///
/// Returns `""` when the name has no dot or ends with one. Only the final
/// dot counts, so `z.png.meta` has extension `.meta`.
pub fn file_extension(path: &str) -> &str {
    let name = path.rsplit(is_separator).next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[idx..],
        _ => "",
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split(is_separator)
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

/// Path of `path` relative to `root`, compared segment by segment.
///
/// Both sides may use either separator style; the result uses `/`. Returns
/// `None` when `root` is not a segment prefix of `path`, or when only one of
/// them is rooted. A path equal to its root yields `Some("")`.
pub fn relative_path(path: &str, root: &str) -> Option<String> {
    if path.starts_with(is_separator) != root.starts_with(is_separator) {
        return None;
    }

    let l_segs_path = split_segments(path);
    let l_segs_root = split_segments(root);
    if l_segs_root.len() > l_segs_path.len() {
        return None;
    }
    if l_segs_path[..l_segs_root.len()] != l_segs_root[..] {
        return None;
    }
    Some(l_segs_path[l_segs_root.len()..].join("/"))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
