//! Error taxonomy for the bundle pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable pipeline failures. Each one aborts the run.
///
/// Malformed JSON is deliberately absent: it degrades to the generic
/// whitespace collapse inside the minifier.
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("git is not available")]
    GitUnavailable(#[source] std::io::Error),

    #[error("not inside a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("`git ls-files` failed: {message}")]
    ListingFailed { message: String },

    #[error("failed to load collation data: {message}")]
    Collation { message: String },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type BundleResult<T> = std::result::Result<T, BundleError>;
