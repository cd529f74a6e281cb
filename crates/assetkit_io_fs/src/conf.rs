//! Path and copy constants.

/// Canonical separator used by every normalized path string.
pub const C_SEP_FORWARD: char = '/';
/// Windows-style separator accepted on input.
pub const C_SEP_BACK: char = '\\';
/// Both separator styles, for splitting and trimming.
pub const TUP_SEPARATORS: [char; 2] = [C_SEP_FORWARD, C_SEP_BACK];
/// Extension of editor sidecar files; never copied by a replace run.
pub const C_EXT_SIDECAR_META: &str = ".meta";
