//! Git backend
//!
//! Lists tracked files with `git ls-files`. The pipeline only sees the
//! `FileLister` trait, so tests can feed it a fixed listing.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::core::error::{BundleError, BundleResult};

/// Source of tracked file paths for one repository
pub trait FileLister {
    /// Directory the listed paths are relative to
    fn root(&self) -> &Path;

    /// Tracked paths, '/'-separated, relative to `root()`
    fn list_files(&self) -> BundleResult<Vec<String>>;
}

/// `FileLister` backed by the `git` executable
#[derive(Debug, Clone)]
pub struct GitLister {
    root: PathBuf,
}

impl GitLister {
    /// Use `root` as the repository root without checking it
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the top-level directory of the repository containing `cwd`
    pub fn discover(cwd: &Path) -> BundleResult<Self> {
        let output = Command::new("git")
            .arg("rev-parse")
            .arg("--show-toplevel")
            .current_dir(cwd)
            .output()
            .map_err(BundleError::GitUnavailable)?;

        if !output.status.success() {
            return Err(BundleError::NotARepository {
                path: cwd.to_path_buf(),
            });
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Repository root: {}", root);
        Ok(Self::new(root))
    }
}

impl FileLister for GitLister {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_files(&self) -> BundleResult<Vec<String>> {
        let output = Command::new("git")
            .arg("-c")
            .arg("core.quotepath=off")
            .arg("ls-files")
            .current_dir(&self.root)
            .output()
            .map_err(BundleError::GitUnavailable)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Err(BundleError::NotARepository {
                    path: self.root.clone(),
                });
            }
            return Err(BundleError::ListingFailed {
                message: first_line(&stderr)
                    .unwrap_or_else(|| format!("git exited with {}", output.status)),
            });
        }

        let files = parse_listing(&String::from_utf8_lossy(&output.stdout));
        debug!("git ls-files returned {} paths", files.len());
        Ok(files)
    }
}

/// First non-blank line of git's stderr; the rest is hints
fn first_line(stderr: &str) -> Option<String> {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Split `git ls-files` output into paths, dropping blank lines
pub fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
