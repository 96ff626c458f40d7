//! Path helpers for tracked file paths
//!
//! Tracked paths come from git as '/'-separated strings relative to the
//! repository root.

use std::path::{Path, PathBuf};

/// Last component of a tracked path
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercased extension of a tracked path, without the dot.
///
/// Dotfiles such as `.json` or `.DS_Store` have no extension.
pub fn extension(path: &str) -> Option<String> {
    Path::new(basename(path))
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Resolve a tracked path against the repository root
pub fn join_tracked(root: &Path, relative: &str) -> PathBuf {
    root.join(relative.replace('/', std::path::MAIN_SEPARATOR_STR))
}
